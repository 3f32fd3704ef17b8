//! Box layout benchmarks.

use boxwood_core::{Margin, Size};
use boxwood_layout::{compute_box_layout, Alignment, BoxLayoutRequest, ChildBox, SizingMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn request_with(children: u32) -> BoxLayoutRequest {
    BoxLayoutRequest::default()
        .with_width(SizingMode::Fill)
        .with_height(SizingMode::Wrap)
        .with_alignment(Alignment::Center, Alignment::End)
        .with_available_size(Size::from_ints(1080, 1920))
        .with_children((0..children).map(|i| {
            ChildBox::new(Size::from_ints(i % 500, (i * 7) % 900))
                .with_margin(Margin::from_ints(i % 3, i % 5, i % 7, i % 11))
        }))
}

fn box_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_layout");
    for children in [1u32, 16, 256, 4096] {
        let request = request_with(children);
        group.bench_with_input(BenchmarkId::from_parameter(children), &request, |b, request| {
            b.iter(|| compute_box_layout(black_box(request)))
        });
    }
    group.finish();
}

criterion_group!(benches, box_layout);
criterion_main!(benches);
