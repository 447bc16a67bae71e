//! Benchmarks for BOM parsing and import flattening.
//!
//! Large platform BOMs (Spring Boot, Quarkus) carry several hundred managed
//! dependencies and a handful of imports, so the fixtures are sized to match.

use bom_core::{Coordinate, PomFile, RepositoryProvider};
use bom_maven::{BomResolver, ManagedDependency, PropertyTable, parse_pom};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;
use std::path::PathBuf;

struct MemoryRepository {
    poms: HashMap<String, String>,
}

impl RepositoryProvider for MemoryRepository {
    fn fetch_pom(&self, coordinate: &Coordinate) -> bom_core::Result<Option<PomFile>> {
        Ok(self.poms.get(&coordinate.to_string()).map(|xml| PomFile {
            location: PathBuf::from(coordinate.to_string()),
            content: xml.as_bytes().to_vec(),
        }))
    }
}

fn generate_bom(group: &str, entries: usize, imports: &[&str]) -> String {
    let mut xml = String::from("<project>\n  <properties>\n");
    for i in 0..entries {
        xml.push_str(&format!("    <lib{i}.version>{}.{}.0</lib{i}.version>\n", i % 7, i % 13));
    }
    xml.push_str("  </properties>\n  <dependencyManagement>\n    <dependencies>\n");
    for i in 0..entries {
        xml.push_str(&format!(
            "      <dependency>\n        <groupId>{group}</groupId>\n        <artifactId>lib{i}</artifactId>\n        <version>${{lib{i}.version}}</version>\n"
        ));
        if i % 10 == 0 {
            xml.push_str(
                "        <exclusions>\n          <exclusion>\n            <groupId>commons-logging</groupId>\n            <artifactId>commons-logging</artifactId>\n          </exclusion>\n        </exclusions>\n",
            );
        }
        xml.push_str("      </dependency>\n");
    }
    for import in imports {
        xml.push_str(&format!(
            "      <dependency>\n        <groupId>bench</groupId>\n        <artifactId>{import}</artifactId>\n        <version>1.0</version>\n        <type>pom</type>\n        <scope>import</scope>\n      </dependency>\n"
        ));
    }
    xml.push_str("    </dependencies>\n  </dependencyManagement>\n</project>\n");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_pom");

    for size in [10, 100, 500] {
        let xml = generate_bom("org.bench", size, &[]);
        group.bench_with_input(BenchmarkId::from_parameter(size), &xml, |b, xml| {
            b.iter(|| {
                let mut properties = PropertyTable::new();
                let mut dependencies: Vec<ManagedDependency> = Vec::new();
                parse_pom(black_box(xml.as_bytes()), &mut properties, &mut dependencies).unwrap();
                dependencies
            });
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut poms = HashMap::new();
    poms.insert(
        "bench:platform:1.0".to_string(),
        generate_bom("org.platform", 300, &["netty", "jackson", "grpc"]),
    );
    poms.insert("bench:netty:1.0".to_string(), generate_bom("io.netty", 60, &[]));
    poms.insert(
        "bench:jackson:1.0".to_string(),
        generate_bom("com.fasterxml.jackson", 40, &["netty"]),
    );
    poms.insert("bench:grpc:1.0".to_string(), generate_bom("io.grpc", 50, &[]));

    let resolver = BomResolver::new(MemoryRepository { poms });
    let root = Coordinate::new("bench", "platform", "1.0");

    c.bench_function("resolve_table_with_imports", |b| {
        b.iter(|| resolver.resolve_table(black_box(&root)).unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_resolve);
criterion_main!(benches);
