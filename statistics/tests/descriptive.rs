//! Statistics over windows and one-shot sources

use auxiliary_core::{IteratorExt, assert_iter_almost_eq, window};
use auxiliary_statistics::{Error, mean, median, range, std_dev, trimmed_mean, variance};
use pretty_assertions::assert_eq;

#[test]
fn test_moving_average() {
    let prices = [10.0, 11.0, 12.0, 13.0, 12.0, 11.0];
    let windows = window(&prices, 3, 1, false).unwrap();

    let averages: Vec<f64> = windows.iter().map(|w| mean(w).unwrap()).collect();
    assert_iter_almost_eq!(averages, [11.0, 12.0, 12.333333333333334, 12.0]);
}

#[test]
fn test_one_shot_source_is_read_once() {
    let mut reads = 0;
    let sample = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0]
        .into_iter()
        .inspect(|_| reads += 1)
        .materialize();

    assert_eq!(mean(&sample), Ok(18.0));
    assert_eq!(median(&sample), Ok(15.5));
    assert_eq!(range(&sample), Ok(38.0));
    assert!(variance(&sample).unwrap() > 0.0);
    assert_eq!(reads, 6);
}

#[test]
fn test_trimmed_mean_is_robust() {
    let sample = [9.8, 10.1, 10.0, 9.9, 10.2, 250.0, -80.0, 10.0];
    let robust = trimmed_mean(&sample, 0.125).unwrap();
    assert_iter_almost_eq!([robust], [10.0]);
    assert!((mean(&sample).unwrap() - robust).abs() > 1.0);
}

#[test]
fn test_errors_on_small_samples() {
    assert_eq!(mean::<f64>(Vec::new()), Err(Error::Empty));
    assert_eq!(median::<f64>(Vec::new()), Err(Error::Empty));
    assert_eq!(std_dev(vec![1.0]), Err(Error::InsufficientData { needed: 2, found: 1 }));
    assert!(matches!(trimmed_mean(&[1.0, 2.0], -0.1), Err(Error::Sequence(_))));
}
