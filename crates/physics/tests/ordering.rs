mod common;

use physics::collision::overlaps;
use physics::{Body, BodyHandle, PhysicsWorld, Vec2};
use common::approx;

fn row(world: &mut PhysicsWorld, xs: &[f32]) -> Vec<BodyHandle> {
    xs.iter()
        .map(|&x| world.spawn(Body::movable(Vec2::new(x, 0.0), 1.0, 1.0)))
        .collect()
}

fn xs(world: &PhysicsWorld, handles: &[BodyHandle]) -> Vec<f32> {
    handles
        .iter()
        .map(|&h| world.body(h).unwrap().position.x)
        .collect()
}

#[test]
fn earlier_bodies_are_not_rechecked() {
    let mut world = PhysicsWorld::new();
    let bodies = row(&mut world, &[0.0, 0.8, 1.6]);

    assert_eq!(world.solve_all(), 2);

    let x = xs(&world, &bodies);
    assert!(approx(x[0], -0.1, 1e-4), "{x:?}");
    assert!(approx(x[1], 0.75, 1e-4), "{x:?}");
    assert!(approx(x[2], 1.75, 1e-4), "{x:?}");

    // The middle body was pushed back into the first one after the first
    // body had already been resolved.
    let rect = |h: BodyHandle| world.body(h).unwrap().world_rect();
    assert!(overlaps(&rect(bodies[0]), &rect(bodies[1])));
    assert!(!overlaps(&rect(bodies[1]), &rect(bodies[2])));
}

#[test]
fn same_order_gives_same_result() {
    let mut first = PhysicsWorld::new();
    let mut second = PhysicsWorld::new();
    let a = row(&mut first, &[0.0, 0.8, 1.6]);
    let b = row(&mut second, &[0.0, 0.8, 1.6]);

    for _ in 0..3 {
        first.step();
        second.step();
    }

    assert_eq!(xs(&first, &a), xs(&second, &b));
}

#[test]
fn registration_order_changes_the_outcome() {
    let mut forward = PhysicsWorld::new();
    let fwd = row(&mut forward, &[0.0, 0.8, 1.6]);

    let mut backward = PhysicsWorld::new();
    let mut bwd = row(&mut backward, &[1.6, 0.8, 0.0]);
    bwd.reverse();

    forward.solve_all();
    backward.solve_all();

    let (f, b) = (xs(&forward, &fwd), xs(&backward, &bwd));
    assert!(
        f.iter().zip(&b).any(|(f, b)| !approx(*f, *b, 1e-3)),
        "forward {f:?} backward {b:?}"
    );
}

#[test]
fn repeated_steps_spread_the_row_apart() {
    let mut world = PhysicsWorld::new();
    let bodies = row(&mut world, &[0.0, 0.8, 1.6]);

    for _ in 0..20 {
        world.step();
    }

    let rect = |h: BodyHandle| world.body(h).unwrap().world_rect();
    assert!(!overlaps(&rect(bodies[0]), &rect(bodies[1])));
    assert!(!overlaps(&rect(bodies[1]), &rect(bodies[2])));
    let x = xs(&world, &bodies);
    assert!(x[0] < x[1] && x[1] < x[2], "{x:?}");
}
