//! Criterion benchmarks for host parsing throughput.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use host_address::{HostAddress, Ip4Address, Ip6Address, parse_host, parse_host_in_email};

/// Benchmark: parse_host across host kinds
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("name_short", "a.co"),
        ("name_typical", "mail.example.com"),
        (
            "name_long",
            "very-long-subdomain-label.another-long-label.yet-another.example.org",
        ),
        ("ipv4", "192.168.100.200"),
        ("ipv6_full", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
        ("ipv6_compressed", "2001:db8::ff00:42:8329"),
        ("ipv6_embedded_ipv4", "::ffff:192.168.1.1"),
    ];

    for (name, host) in test_cases {
        group.throughput(Throughput::Bytes(host.len() as u64));
        group.bench_with_input(BenchmarkId::new("host", name), &host, |b, host| {
            b.iter(|| parse_host(black_box(host)));
        });
    }

    group.finish();
}

/// Benchmark: rejection paths, which run every scanner
fn bench_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject");

    let test_cases = [
        ("trailing_hyphen", "good--"),
        ("octet_overflow", "1.2.3.256"),
        ("incomplete_ipv4", "1.2.3"),
        ("double_compression", "1::2::3"),
        ("bad_character", "exa_mple.com"),
    ];

    for (name, host) in test_cases {
        group.bench_with_input(BenchmarkId::new("host", name), &host, |b, host| {
            b.iter(|| parse_host(black_box(host)));
        });
    }

    group.finish();
}

/// Benchmark: email domain literals found at an offset
fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("email");

    let test_cases = [
        ("name", "user@example.com"),
        ("ipv4_literal", "user@[10.0.0.1]"),
        ("ipv6_literal", "user@[IPv6:2001:db8::1]"),
    ];

    for (name, address) in test_cases {
        let offset = address.find('@').map_or(0, |at| at + 1);
        group.bench_with_input(
            BenchmarkId::new("address", name),
            &(address, offset),
            |b, (address, offset)| {
                b.iter(|| parse_host_in_email(black_box(address), black_box(*offset)));
            },
        );
    }

    group.finish();
}

/// Benchmark: case-insensitive comparison of parsed hosts
fn bench_compare(c: &mut Criterion) {
    let lower = HostAddress::parse("mail.example.com").expect("valid host");
    let upper = HostAddress::parse("MAIL.EXAMPLE.COM").expect("valid host");

    c.bench_function("compare/case_insensitive", |b| {
        b.iter(|| black_box(&lower) == black_box(&upper));
    });
}

/// Benchmark: subnet masking at varying prefix lengths
fn bench_subnet(c: &mut Criterion) {
    let mut group = c.benchmark_group("subnet");

    let ip4: Ip4Address = "192.168.100.200".parse().expect("valid IPv4");
    let ip6: Ip6Address = "2001:db8:85a3::8a2e:370:7334".parse().expect("valid IPv6");

    for bits in [0u8, 8, 24, 32] {
        group.bench_with_input(BenchmarkId::new("ipv4", bits), &bits, |b, bits| {
            b.iter(|| black_box(ip4).subnet(black_box(*bits)));
        });
    }

    for bits in [0u8, 48, 64, 128] {
        group.bench_with_input(BenchmarkId::new("ipv6", bits), &bits, |b, bits| {
            b.iter(|| black_box(ip6).subnet(black_box(*bits)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_reject,
    bench_email,
    bench_compare,
    bench_subnet,
);
criterion_main!(benches);
