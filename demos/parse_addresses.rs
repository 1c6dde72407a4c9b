use vies_address::{ParseConfig, parse_address, parse_address_with};

fn main() {
    println!("=== VIES Address Splitting ===\n");

    let samples = [
        ("NL", "Hoofdstraat 1\n1234 AB Amsterdam"),
        ("SI", "Neka ulica 5, 1000 Ljubljana"),
        ("SK", "Hlavná 1\n811 01 Bratislava"),
        ("SK", "81101 Bratislava\nSlovensko"),
        ("CZ", "Kaprova 42/14\n110 00  PRAHA 1"),
        ("EL", "ΛΕΩΦ ΚΗΦΙΣΙΑΣ 44\n15125 - ΜΑΡΟΥΣΙ"),
        ("PT", "Rua Augusta 1\n1100-048 Lisboa"), // no rule, empty result
        ("CZ", "Kaprova 42/14"),                  // unexpected layout
        ("XX", "Somewhere 1"),                    // unsupported country
    ];

    for (cc, address) in &samples {
        let shown = address.replace('\n', " | ");
        match parse_address(cc, address) {
            Ok(addr) => println!(
                "  {cc} {shown:?}\n     street={:?} zip={:?} city={:?}",
                addr.street, addr.zip, addr.city
            ),
            Err(e) => println!("  {cc} {shown:?}\n     ERROR: {e}"),
        }
    }

    println!("\n=== Greek Script ===\n");

    let address = "Ερμού 10\n10563 Αθήνα";
    let latin = parse_address("EL", address).unwrap();
    let greek = parse_address_with("EL", address, &ParseConfig::default().ignore_greek(true)).unwrap();
    println!("  transliterated: {} / {} {}", latin.street, latin.zip, latin.city);
    println!("  ignore_greek:   {} / {} {}", greek.street, greek.zip, greek.city);
}
