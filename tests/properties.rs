use proptest::prelude::*;

use sigsimd::signal::*;
use sigsimd::simd::Lanes;

fn signal(max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0e3f32..1.0e3, 0..max_len)
}

fn pair(max_len: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (0..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(-1.0e3f32..1.0e3, len),
            prop::collection::vec(-1.0e3f32..1.0e3, len),
        )
    })
}

proptest! {
    #[test]
    fn cumulative_sum_is_sequential(input in signal(64)) {
        let mut simd = vec![0.0f32; input.len()];
        let mut scalar = vec![0.0f32; input.len()];
        cumulative_sum(&input, &mut simd).unwrap();
        scalar_cumulative_sum(&input, &mut scalar).unwrap();

        for (a, b) in simd.iter().zip(&scalar) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn cumulative_sum_width_independent(input in signal(64)) {
        let mut narrow = vec![0.0f32; input.len()];
        let mut wide = vec![0.0f32; input.len()];
        cumulative_sum_with::<Lanes<2>>(&input, &mut narrow).unwrap();
        cumulative_sum_with::<Lanes<8>>(&input, &mut wide).unwrap();

        for (a, b) in narrow.iter().zip(&wide) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn min_index_matches_first_occurrence(data in prop::collection::vec(0u8..8, 0..64)) {
        let data: Vec<f32> = data.into_iter().map(f32::from).collect();
        prop_assert_eq!(min_index(&data), scalar_min_index(&data));
        prop_assert_eq!(min_index_with::<Lanes<8>>(&data), scalar_min_index(&data));
        prop_assert_eq!(try_min_index(&data).is_none(), data.is_empty());
    }

    #[test]
    fn threshold_flags_are_binary_and_strict(data in signal(64), threshold in -1.0e3f32..1.0e3) {
        let mut flags = vec![9u8; data.len()];
        threshold_detection(&data, &mut flags, threshold).unwrap();

        for (&x, &flag) in data.iter().zip(&flags) {
            prop_assert!(flag <= 1);
            prop_assert_eq!(flag == 1, x > threshold);
        }
    }

    #[test]
    fn cross_correlation_close_to_scalar((s1, s2) in pair(64)) {
        let simd = cross_correlation(&s1, &s2).unwrap();
        let scalar = scalar_cross_correlation(&s1, &s2).unwrap();
        let scale: f32 = s1.iter().zip(&s2).map(|(a, b)| (a * b).abs()).sum();

        prop_assert!((simd - scalar).abs() <= 1e-5 * scale.max(1.0));
    }

    #[test]
    fn weighted_average_with_equal_weights_is_mean(values in signal(64), weight in 0.01f32..10.0) {
        let weights = vec![weight; values.len()];
        let result = weighted_average(&values, &weights).unwrap();

        if values.is_empty() {
            prop_assert_eq!(result, 0.0);
        } else {
            let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64;
            prop_assert!((f64::from(result) - mean).abs() <= 5e-2, "{} vs {}", result, mean);
        }
    }

    #[test]
    fn moving_average_stays_within_window_bounds(input in signal(48), window_size in 1usize..20) {
        let mut output = vec![0.0f32; input.len()];
        moving_average(&input, &mut output, window_size).unwrap();

        for (i, &avg) in output.iter().enumerate() {
            let window = &input[(i + 1).saturating_sub(window_size)..=i];
            let lo = window.iter().copied().fold(f32::INFINITY, f32::min);
            let hi = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let slack = 1e-3 * lo.abs().max(hi.abs()).max(1.0);
            prop_assert!(avg >= lo - slack && avg <= hi + slack, "{} not in [{}, {}]", avg, lo, hi);
        }
    }

    #[test]
    fn ema_stays_within_signal_bounds(input in signal(48), alpha in 0.0f32..=1.0) {
        let mut output = vec![0.0f32; input.len()];
        exp_moving_average(&input, &mut output, alpha).unwrap();

        let lo = input.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = input.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let slack = 1e-4 * lo.abs().max(hi.abs()).max(1.0);
        for &y in &output {
            prop_assert!(y >= lo - slack && y <= hi + slack);
        }
    }
}
