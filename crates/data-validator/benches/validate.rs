use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_validator::validate_body;

const BODY: &[u8] = br#"{"Company":"maruti","year":2015,"km_driven":45000,"fuel":"Petrol","transmission":"Manual","owner":"First Owner","seller_type":"Individual","seats":5}"#;
const WRAPPED: &[u8] = br#"[{"Company":"HYUNDAI","year":"2019","km_driven":"32000","fuel":"Diesel","transmission":"Automatic","owner":"Second Owner","seller_type":"Dealer","seats":"7"}]"#;

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_object", |b| b.iter(|| validate_body(black_box(BODY))));
    c.bench_function("validate_wrapped_strings", |b| b.iter(|| validate_body(black_box(WRAPPED))));
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
