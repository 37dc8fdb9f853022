//! Property-based tests relating the statistics to each other.

use proptest::prelude::*;
use statscalc_stats::{
    DEFAULT_ROUND_TO, Number, StatsError, lower_fence, mean, mean_abs_dev, mean_devs, median,
    number, outliers, pvariance, squared_dist, stdev, upper_fence, variance, whiskers,
};

fn value() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-1000_i64..1000).prop_map(Number::Int),
        (-1000.0..1000.0_f64).prop_map(Number::Float),
    ]
}

fn sample(min_len: usize) -> impl Strategy<Value = Vec<Number>> {
    prop::collection::vec(value(), min_len..60)
}

fn sorted(data: &[Number]) -> Vec<Number> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

proptest! {
    #[test]
    fn prop_stdev_squared_is_variance(data in sample(2)) {
        let var = variance(&data, DEFAULT_ROUND_TO).unwrap();
        let sd = stdev(&data, DEFAULT_ROUND_TO).unwrap();
        // stdev is rounded to four places after the square root
        prop_assert!((sd * sd - var).abs() <= sd * 1e-4 + 1e-6);
    }

    #[test]
    fn prop_population_variance_is_smaller(data in sample(2)) {
        let pvar = pvariance(&data, DEFAULT_ROUND_TO).unwrap();
        let var = variance(&data, DEFAULT_ROUND_TO).unwrap();
        prop_assert!(pvar <= var);
    }

    #[test]
    fn prop_odd_median_is_middle_element(data in sample(1)) {
        prop_assume!(data.len() % 2 == 1);
        let sorted = sorted(&data);
        prop_assert_eq!(median(&data).unwrap(), sorted[data.len() / 2]);
    }

    #[test]
    fn prop_mean_abs_dev_averages_mean_devs(data in sample(1)) {
        let devs = mean_devs(&data, 4).unwrap();
        #[expect(clippy::cast_precision_loss)]
        let expected = number::round(devs.iter().sum::<f64>() / data.len() as f64, 4);
        prop_assert_eq!(mean_abs_dev(&data, 4).unwrap(), expected);
    }

    #[test]
    fn prop_distances_follow_input_order(data in sample(1)) {
        let avg = mean(&data, DEFAULT_ROUND_TO).unwrap();
        let devs = mean_devs(&data, DEFAULT_ROUND_TO).unwrap();
        let squares = squared_dist(&data, DEFAULT_ROUND_TO).unwrap();
        prop_assert_eq!(devs.len(), data.len());
        prop_assert_eq!(squares.len(), data.len());
        for (value, dev) in data.iter().zip(&devs) {
            prop_assert_eq!(*dev, number::round((avg - value.as_f64()).abs(), DEFAULT_ROUND_TO));
        }
    }

    #[test]
    fn prop_outliers_lie_on_or_beyond_fences(data in sample(1)) {
        let lower = lower_fence(&data).unwrap();
        let upper = upper_fence(&data).unwrap();
        let outliers = outliers(&data).unwrap();
        if (lower - upper).abs() < f64::EPSILON {
            prop_assert!(outliers.lower.is_empty() && outliers.upper.is_empty());
        } else {
            prop_assert!(outliers.lower.iter().all(|n| n.as_f64() <= lower));
            prop_assert!(outliers.upper.iter().all(|n| n.as_f64() >= upper));
            let expected = data.iter().filter(|n| n.as_f64() <= lower || n.as_f64() >= upper).count();
            prop_assert_eq!(outliers.lower.len() + outliers.upper.len(), expected);
        }
    }

    #[test]
    fn prop_whiskers_stay_inside_fences(data in sample(1)) {
        let lower = lower_fence(&data).unwrap();
        let upper = upper_fence(&data).unwrap();
        match whiskers(&data).unwrap() {
            Some(whiskers) => {
                prop_assert!(whiskers.lower.as_f64() > lower);
                prop_assert!(whiskers.upper.as_f64() < upper);
                prop_assert!(whiskers.lower <= whiskers.upper);
            }
            None => {
                prop_assert!(data.iter().all(|n| n.as_f64() <= lower || n.as_f64() >= upper));
            }
        }
    }

    #[test]
    fn prop_non_finite_values_are_rejected(mut data in sample(1), index in any::<prop::sample::Index>()) {
        let i = index.index(data.len());
        data[i] = Number::Float(f64::NAN);
        prop_assert!(matches!(mean(&data, 4), Err(StatsError::Data(_))));
        prop_assert!(matches!(median(&data), Err(StatsError::Data(_))));
        prop_assert!(matches!(whiskers(&data), Err(StatsError::Data(_))));
    }
}
