use db2authors::render::{parse_address, Address};

#[test]
fn test_parse_address_full_us_address() {
    let address = parse_address("Inst A, City X, ST 12345, Country Y");

    assert_eq!(address.institution, "Inst A");
    assert_eq!(address.city, "City X");
    assert_eq!(address.state, "ST");
    assert_eq!(address.zipcode, "12345");
    assert_eq!(address.country, "Country Y");
}

#[test]
fn test_parse_address_institution_and_country_only() {
    let address = parse_address("Inst A, Country Y");

    assert_eq!(address.institution, "Inst A");
    assert_eq!(address.country, "Country Y");
    assert_eq!(address.state, "");
    assert_eq!(address.zipcode, "");
    assert_eq!(address.city, "");
}

#[test]
fn test_parse_address_three_segments_fills_state_not_city() {
    // The middle segment is taken as the state field even when it is a city
    let address = parse_address("Institute for Astronomy, Edinburgh, UK");

    assert_eq!(address.institution, "Institute for Astronomy");
    assert_eq!(address.state, "Edinburgh");
    assert_eq!(address.zipcode, "");
    assert_eq!(address.city, "");
    assert_eq!(address.country, "UK");
}

#[test]
fn test_parse_address_skips_street_segment() {
    let address =
        parse_address("National Optical Astronomy Observatory, 950 N. Cherry Ave, Tucson, AZ 85719, USA");

    assert_eq!(
        address,
        Address {
            institution: "National Optical Astronomy Observatory".to_string(),
            city: "Tucson".to_string(),
            state: "AZ".to_string(),
            zipcode: "85719".to_string(),
            country: "USA".to_string(),
        }
    );
}

#[test]
fn test_parse_address_zipcode_needs_exactly_two_tokens() {
    let address = parse_address("Inst, City, New York 10001, USA");

    assert_eq!(address.state, "New");
    assert_eq!(address.zipcode, "");
}

#[test]
fn test_parse_address_blank_state_segment_is_empty() {
    let address = parse_address("Inst, City, , USA");

    assert_eq!(address.state, "");
    assert_eq!(address.zipcode, "");
    assert_eq!(address.city, "City");
    assert_eq!(address.country, "USA");
}
