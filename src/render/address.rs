/// Positional split of an affiliation string:
/// `institution, [street,] [city,] [state [zip],] country`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub institution: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

/// Fields the string is too short to supply stay empty.
pub fn parse_address(text: &str) -> Address {
    let segments: Vec<&str> = text.split(',').map(str::trim).collect();
    let mut address = Address {
        institution: segments[0].to_string(),
        ..Address::default()
    };

    let mut ind = segments.len() - 1;
    if ind > 0 {
        address.country = segments[ind].to_string();
        ind -= 1;
    }
    if ind > 0 {
        let tokens: Vec<&str> = segments[ind].split_whitespace().collect();
        ind -= 1;
        address.state = tokens.first().map(|s| s.to_string()).unwrap_or_default();
        if tokens.len() == 2 {
            address.zipcode = tokens[1].to_string();
        }
    }
    if ind > 0 {
        address.city = segments[ind].to_string();
    }

    address
}
