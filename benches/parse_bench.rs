use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vies_address::greek::transliterate;
use vies_address::parse_address;

const SAMPLES: &[(&str, &str)] = &[
    ("NL", "Hoofdstraat 1\n1234 AB Amsterdam"),
    ("SI", "Dunajska cesta 5, Stavba B, 1000 Ljubljana"),
    ("SK", "Hlavná 1\nSlovensko\n811 01 Bratislava"),
    ("CZ", "Kaprova 42/14\nPRAHA 1 - STARÉ MĚSTO\n110 00  PRAHA 1"),
    ("EL", "ΛΕΩΦ ΒΑΣΙΛΙΣΣΗΣ ΣΟΦΙΑΣ 12\n10674 - ΑΘΗΝΑ"),
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_address_all_countries", |b| {
        b.iter(|| {
            for (cc, address) in SAMPLES {
                let _ = parse_address(black_box(cc), black_box(address));
            }
        })
    });
}

fn bench_transliterate(c: &mut Criterion) {
    c.bench_function("transliterate_street", |b| {
        b.iter(|| transliterate(black_box("ΛΕΩΦΟΡΟΣ ΒΑΣΙΛΙΣΣΗΣ ΣΟΦΙΑΣ 12")))
    });

    c.bench_function("transliterate_latin_passthrough", |b| {
        b.iter(|| transliterate(black_box("Hoofdstraat 1, 1234 AB Amsterdam")))
    });
}

criterion_group!(benches, bench_parse, bench_transliterate);
criterion_main!(benches);
