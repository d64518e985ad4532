//! Benchmarks for header parsing and walking

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use headmeta::{walk_header, ScanConfig};
use headmeta_cpp::CppFrontend;
use headmeta_frontend_api::{Frontend, TranslationUnit};
use std::path::Path;

const SAMPLE_HEADER: &str = r#"
#pragma once

namespace godot {

class Node2D : public CanvasItem {
public:
    enum ProcessMode {
        PROCESS_MODE_INHERIT,
        PROCESS_MODE_ALWAYS = 4,
        PROCESS_MODE_DISABLED,
    };

    struct Transform2DCache {
        Transform2D transform;
        bool dirty;
    };

    void set_position(const Vector2 &p_position);
    Vector2 get_position() const;
    void set_rotation(double p_radians);
    double get_rotation() const;
    virtual void _draw();
    static Node2D *duplicate_node(const Node2D *p_source);

    Node2D();
    ~Node2D();
};

enum Error {
    OK,
    FAILED,
    ERR_OUT_OF_MEMORY = 1 << 4,
};

} // namespace godot
"#;

fn benchmark_parse_source(c: &mut Criterion) {
    let frontend = CppFrontend::new().unwrap();

    c.bench_function("cpp_parse_source", |b| {
        b.iter(|| {
            frontend
                .parse_source(black_box(SAMPLE_HEADER), Path::new("bench.hpp"))
                .unwrap()
        })
    });
}

fn benchmark_walk_header(c: &mut Criterion) {
    let frontend = CppFrontend::new().unwrap();
    let unit = frontend
        .parse_source(SAMPLE_HEADER, Path::new("bench.hpp"))
        .unwrap();
    let config = ScanConfig::new("godot");

    c.bench_function("cpp_walk_header", |b| {
        b.iter(|| black_box(walk_header(&unit.top_level(), &config)))
    });
}

criterion_group!(benches, benchmark_parse_source, benchmark_walk_header);
criterion_main!(benches);
