use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::{
    CellMask, GridLayout, PositionAwareQuadTree, QuadTree, RegionQuadTree,
};
use quadtree::shapes::{Boundable, Rectangle, SpatialElement};
use rand::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Body {
    id: u32,
    rect: Rectangle,
}

impl Boundable for Body {
    fn min_x(&self) -> f32 {
        self.rect.min_x()
    }
    fn min_y(&self) -> f32 {
        self.rect.min_y()
    }
    fn max_x(&self) -> f32 {
        self.rect.max_x()
    }
    fn max_y(&self) -> f32 {
        self.rect.max_y()
    }
}

impl SpatialElement for Body {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
}

const WORLD: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 1000.0,
};

fn populated(rng: &mut StdRng, count: u32) -> (PositionAwareQuadTree<Body>, Vec<Body>) {
    let mut quadtree: PositionAwareQuadTree<Body> = QuadTree::new(WORLD, 8).unwrap();
    let mut bodies = Vec::with_capacity(count as usize);
    for id in 0..count {
        let body = Body {
            id,
            rect: WORLD.get_random_rectangle_inside(10.0, rng),
        };
        quadtree.add(body);
        bodies.push(body);
    }
    (quadtree, bodies)
}

fn add_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut quadtree: RegionQuadTree<Body> = QuadTree::new(WORLD, 8).unwrap();
    let mut next_id = 0;

    c.bench_function("quadtree_add", |b| {
        b.iter(|| {
            next_id += 1;
            let body = Body {
                id: next_id,
                rect: WORLD.get_random_rectangle_inside(10.0, &mut rng),
            };
            quadtree.add(black_box(body));
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (mut quadtree, bodies) = populated(&mut rng, 10_000);

    c.bench_function("quadtree_remove_add", |b| {
        b.iter(|| {
            let body = bodies[rng.gen_range(0..bodies.len())];
            quadtree.remove(black_box(&body));
            quadtree.add(body);
        })
    });
}

fn position_changed_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, mut bodies) = populated(&mut rng, 10_000);

    c.bench_function("quadtree_position_changed", |b| {
        b.iter(|| {
            let index = rng.gen_range(0..bodies.len());
            let body = &mut bodies[index];
            body.rect.x = (body.rect.x + rng.gen_range(-5.0..5.0)).clamp(0.0, 990.0);
            body.rect.y = (body.rect.y + rng.gen_range(-5.0..5.0)).clamp(0.0, 990.0);
            quadtree.position_changed(black_box(*body));
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (quadtree, _) = populated(&mut rng, 10_000);
    let mut found = Vec::new();

    c.bench_function("quadtree_region_query", |b| {
        b.iter(|| {
            let query = WORLD.get_random_rectangle_inside(50.0, &mut rng);
            found.clear();
            quadtree.elements_within_region(black_box(&query), &mut found);
        })
    });
}

fn grid_merge_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let mask = CellMask::from_fn(128, 128, |_, _| rng.gen_bool(0.7));
    let layout = GridLayout::new(0.0, 0.0, 1000.0 / 128.0, 1000.0 / 128.0).unwrap();

    c.bench_function("quadtree_add_merged_cells", |b| {
        b.iter(|| {
            let mut quadtree: RegionQuadTree<Body> = QuadTree::new(WORLD, 8).unwrap();
            let mut next_id = 0;
            quadtree.add_merged_cells(black_box(&mask), &layout, |rect| {
                next_id += 1;
                Body { id: next_id, rect }
            })
        })
    });
}

criterion_group!(
    benches,
    add_benchmark,
    remove_benchmark,
    position_changed_benchmark,
    query_benchmark,
    grid_merge_benchmark
);
criterion_main!(benches);
