//! Tests for eye selection, sizing and the insufficient-shapes guard

#[cfg(test)]
mod tests {
    use cellface::generator::eyes;
    use cellface::generator::outer::PlacedShape;
    use cellface::generator::random::RandomSource;
    use cellface::io::configuration::{
        COLOR_EYE_IRIS, COLOR_EYE_WHITE, EYE_JITTER, EYE_PULL, EYE_RADIUS_SCALE,
        IRIS_OFFSET_SCALE, IRIS_RADIUS_SCALE, LAYER_EYE, LAYER_IRIS,
    };
    use cellface::io::error::GeneratorError;
    use cellface::scene::{Scene, Shape};

    fn ring_of(count: usize) -> Vec<PlacedShape> {
        (0..count)
            .map(|index| {
                let angle = std::f64::consts::TAU * index as f64 / count as f64;
                PlacedShape {
                    x: 0.5 * angle.cos(),
                    y: 0.5 * angle.sin(),
                    radius: 0.15,
                }
            })
            .collect()
    }

    fn circles(scene: &Scene, layer: u8) -> Vec<([f64; 2], f64)> {
        scene
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle {
                    center,
                    radius,
                    layer: shape_layer,
                    ..
                } if *shape_layer == layer => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    // Tests requesting more eyes than placed shapes is a defined failure
    // Verified by truncating the request instead of failing
    #[test]
    fn test_oversized_request_fails() {
        let mut scene = Scene::new();
        let mut random = RandomSource::new(3);
        let placed = ring_of(4);

        let result = eyes::overlay(&mut scene, &mut random, &placed, 5);
        match result {
            Err(GeneratorError::InsufficientShapes { requested, placed: available }) => {
                assert_eq!(requested, 5);
                assert_eq!(available, 4);
            }
            other => unreachable!("Expected InsufficientShapes, got {other:?}"),
        }
        assert!(scene.shapes().is_empty(), "no shape may be drawn on failure");
    }

    // Tests each eye contributes a white disc and an iris above it
    #[test]
    fn test_each_eye_draws_disc_and_iris() {
        let mut scene = Scene::new();
        let mut random = RandomSource::new(8);
        let placed = ring_of(9);

        eyes::overlay(&mut scene, &mut random, &placed, 4).expect("selection should succeed");

        let eye_discs = circles(&scene, LAYER_EYE);
        let irises = circles(&scene, LAYER_IRIS);
        assert_eq!(eye_discs.len(), 4);
        assert_eq!(irises.len(), 4);
        assert_eq!(scene.shapes().len(), 8);

        for shape in scene.shapes() {
            match shape {
                Shape::Circle { color, layer, .. } if *layer == LAYER_EYE => {
                    assert_eq!(*color, COLOR_EYE_WHITE);
                }
                Shape::Circle { color, layer, .. } if *layer == LAYER_IRIS => {
                    assert_eq!(*color, COLOR_EYE_IRIS);
                }
                other => unreachable!("Unexpected shape in eye scene: {other:?}"),
            }
        }
    }

    // Tests eye discs derive from distinct placed cells with the documented
    // pull and jitter
    #[test]
    fn test_eyes_anchor_to_distinct_cells() {
        let mut scene = Scene::new();
        let mut random = RandomSource::new(15);
        let placed = ring_of(10);

        eyes::overlay(&mut scene, &mut random, &placed, 10).expect("selection should succeed");

        let mut matched = vec![false; placed.len()];
        for (center, radius) in circles(&scene, LAYER_EYE) {
            assert!((radius - 0.15 * EYE_RADIUS_SCALE).abs() < 1e-12);

            let anchor = placed.iter().position(|cell| {
                let expected_x = (0.0 - cell.x).mul_add(EYE_PULL, cell.x);
                let expected_y = (0.0 - cell.y).mul_add(EYE_PULL, cell.y);
                (center[0] - expected_x).abs() <= EYE_JITTER + 1e-9
                    && (center[1] - expected_y).abs() <= EYE_JITTER + 1e-9
            });

            let index = anchor.expect("every eye should anchor to a placed cell");
            assert!(
                !matched.get(index).copied().unwrap_or(true),
                "cell {index} anchored twice"
            );
            if let Some(flag) = matched.get_mut(index) {
                *flag = true;
            }
        }
        assert!(matched.iter().all(|&flag| flag), "every cell should carry an eye");
    }

    // Tests the iris sits at the documented offset inside its eye disc
    // Verified by doubling the offset fraction
    #[test]
    fn test_iris_offset_and_size() {
        let mut scene = Scene::new();
        let mut random = RandomSource::new(23);
        let placed = ring_of(6);

        eyes::overlay(&mut scene, &mut random, &placed, 3).expect("selection should succeed");

        let eye_discs = circles(&scene, LAYER_EYE);
        let irises = circles(&scene, LAYER_IRIS);

        for ((eye_center, eye_radius), (iris_center, iris_radius)) in
            eye_discs.iter().zip(irises.iter())
        {
            assert!((iris_radius - eye_radius * IRIS_RADIUS_SCALE).abs() < 1e-12);

            let dx = iris_center[0] - eye_center[0];
            let dy = iris_center[1] - eye_center[1];
            let distance = dx.hypot(dy);
            assert!(
                (distance - eye_radius * IRIS_OFFSET_SCALE).abs() < 1e-9,
                "iris offset {distance} should be {}",
                eye_radius * IRIS_OFFSET_SCALE
            );
        }
    }

    // Tests a zero eye count draws nothing and succeeds
    #[test]
    fn test_zero_eyes_is_a_no_op() {
        let mut scene = Scene::new();
        let mut random = RandomSource::new(1);
        let placed = ring_of(5);

        eyes::overlay(&mut scene, &mut random, &placed, 0).expect("empty selection should succeed");
        assert!(scene.shapes().is_empty());
    }
}
