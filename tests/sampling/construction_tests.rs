//! tests for sampler construction branches and cloning
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use sampled_fn::sampling::function::scalar;
use sampled_fn::sampling::{
    ConfigError, FunctionSampler, Point, PointsIoError, SamplerCfg, SamplerError, DEFAULT_EPSILON,
};

type TestResult = Result<(), SamplerError>;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("sampled_fn_construction_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("temp file writable");
    path
}

#[test]
fn empty_config_installs_sentinel_function() -> TestResult {
    let mut s = FunctionSampler::new(SamplerCfg::new())?;
    assert_eq!(s.epsilon(), DEFAULT_EPSILON);
    assert!(s.points().is_empty());
    assert!(s.has_function());

    // sentinel yields NaN, which the clamp turns into 1 / epsilon
    assert_eq!(s.calculate_point(2.0)?, Point::new(2.0, 1.0 / DEFAULT_EPSILON));
    Ok(())
}

#[test]
fn default_matches_empty_config() -> TestResult {
    let built = FunctionSampler::new(SamplerCfg::new())?;
    let default = FunctionSampler::default();
    assert_eq!(built.epsilon(), default.epsilon());
    assert_eq!(built.points(), default.points());
    assert_eq!(built.arguments(), default.arguments());
    assert_eq!(built.has_function(), default.has_function());
    Ok(())
}

#[test]
fn empty_points_keep_arguments() -> TestResult {
    let s = FunctionSampler::new(SamplerCfg::new().with_arguments(vec![0.0, 7.0]))?;
    assert_eq!(s.arguments(), &[0.0, 7.0]);
    Ok(())
}

#[test]
fn points_without_function_stay_unconfigured() {
    let mut s = FunctionSampler::new(
        SamplerCfg::new()
            .with_points(vec![Point::new(1.0, 1.0), Point::new(0.0, 0.0)])
            .with_arguments(vec![0.0, 2.0])
    ).unwrap();

    assert!(!s.has_function());
    assert!(s.points().is_sorted());
    assert!(s.arguments().is_empty());

    assert!(matches!(s.calculate_point(0.5), Err(SamplerError::UnconfiguredFunction)));
    let p = s.get_point(0).unwrap();
    assert!(matches!(s.differential(p), Err(SamplerError::UnconfiguredFunction)));
}

#[test]
fn explicit_points_are_sorted() -> TestResult {
    let s = FunctionSampler::new(
        SamplerCfg::new()
            .with_points(vec![Point::new(1.0, 1.0), Point::new(0.0, 0.0), Point::new(0.5, 0.25)])
            .with_function(scalar(|x| x * x))
    )?;
    assert!(s.points().is_sorted());
    Ok(())
}

#[test]
fn epsilon_from_parameter_file() -> TestResult {
    let path = temp_file("params_ok.txt", "# tolerances\nscale = 2\nepsilon = 1e-6\n");
    let s = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&path))?;
    assert_eq!(s.epsilon(), 1e-6);

    fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn parameter_file_accepts_colon_and_space_forms() -> TestResult {
    let colon = temp_file("params_colon.txt", "epsilon: 0.001\n");
    let space = temp_file("params_space.txt", "   epsilon   0.01   # coarse\n");

    let mut s = FunctionSampler::default();
    s.load_epsilon(&colon)?;
    assert_eq!(s.epsilon(), 0.001);
    s.load_epsilon(&space)?;
    assert_eq!(s.epsilon(), 0.01);

    fs::remove_file(colon).ok();
    fs::remove_file(space).ok();
    Ok(())
}

#[test]
fn missing_parameter_file() {
    let path = std::env::temp_dir().join("sampled_fn_construction_no_such_params.txt");
    let err = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&path)).unwrap_err();
    assert!(matches!(err, SamplerError::Config(ConfigError::Unreadable { .. })));
}

#[test]
fn parameter_file_without_epsilon() {
    let path = temp_file("params_no_eps.txt", "delta = 0.5\n");
    let err = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&path)).unwrap_err();
    assert!(matches!(
        err,
        SamplerError::Config(ConfigError::MissingKey { ref key, .. }) if key == "epsilon"
    ));
    fs::remove_file(path).ok();
}

#[test]
fn parameter_file_with_bad_values() {
    let text  = temp_file("params_text.txt", "epsilon = tiny\n");
    let neg   = temp_file("params_neg.txt", "epsilon = -1e-3\n");
    let lone  = temp_file("params_lone.txt", "epsilon\n");

    let err = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&text)).unwrap_err();
    assert!(matches!(
        err,
        SamplerError::Config(ConfigError::InvalidValue { line: 1, ref value, .. }) if value == "tiny"
    ));

    let err = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&neg)).unwrap_err();
    assert!(matches!(
        err,
        SamplerError::Config(ConfigError::InvalidEpsilon { got }) if got == -1e-3
    ));

    let err = FunctionSampler::new(SamplerCfg::new().with_parameter_file(&lone)).unwrap_err();
    assert!(matches!(err, SamplerError::Config(ConfigError::Malformed { line: 1, .. })));

    for path in [text, neg, lone] {
        fs::remove_file(path).ok();
    }
}

#[test]
fn points_file_takes_precedence() -> TestResult {
    let path = temp_file("points_precedence.txt", "2 4\n0\n1 1\n");
    let s = FunctionSampler::new(
        SamplerCfg::new()
            .with_points_file(&path)
            .with_points(vec![Point::new(100.0, 0.0)])
            .with_function(scalar(|x| x * x))
    )?;

    let expected = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 4.0)];
    assert_eq!(s.points().as_slice(), &expected);

    fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn missing_points_file_aborts_construction() {
    let path = std::env::temp_dir().join("sampled_fn_construction_no_such_points.txt");
    let err = FunctionSampler::new(
        SamplerCfg::new().with_points_file(&path).with_function(scalar(|x| x))
    ).unwrap_err();
    assert!(matches!(err, SamplerError::PointsIo(PointsIoError::Read { .. })));
}

#[test]
fn clone_copies_points_and_shares_function() -> TestResult {
    let original = FunctionSampler::new(
        SamplerCfg::new()
            .with_arguments(vec![0.0, 1.0])
            .with_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .with_function(scalar(|x| x))
    )?;

    let mut copy = original.clone();
    copy.add_point(Point::new(5.0, 5.0));
    copy.set_argument(1, 9.0)?;
    copy.calculate_point(3.0)?;

    assert_eq!(original.points().len(), 2);
    assert_eq!(copy.points().len(), 3);
    assert_eq!(original.arguments(), &[0.0, 1.0]);
    assert_eq!(copy.arguments(), &[3.0, 9.0]);

    let (a, b) = (original.math_function(), copy.math_function());
    assert!(matches!((a, b), (Some(a), Some(b)) if Arc::ptr_eq(a, b)));
    Ok(())
}
