use rosu_sr::{
    model::chart::{TooSuspicious, MAX_COLUMNS},
    Chart, Note, ValidationError,
};

use self::common::*;

mod common;

#[test]
fn validate() {
    assert!(mixed_4k().validate().is_ok());
    assert!(Chart::new(Vec::new(), MAX_COLUMNS).validate().is_ok());

    assert_eq!(
        Chart::new(Vec::new(), MAX_COLUMNS + 1).validate(),
        Err(ValidationError::TooManyColumns {
            columns: MAX_COLUMNS + 1
        })
    );

    let chart = Chart::new(vec![Note::tap(0, f64::INFINITY)], 1);
    assert!(matches!(
        chart.validate(),
        Err(ValidationError::InvalidTime { idx: 0, .. })
    ));
}

#[test]
fn counts() {
    let chart = mixed_4k();

    assert_eq!(chart.n_hold_notes(), 6);
    assert_eq!(chart.n_taps(), 44);
    assert_eq_float(chart.duration(), 5641.0);
}

#[test]
fn kps() {
    let chart = Chart::new(stream(4, 64, 125.0), 4);

    // one measure at 120 BPM
    let kps = chart.kps(4.0 * 60_000.0 / 120.0);

    assert_eq!(kps.values, vec![8.0; 4]);
    // 64 notes between 0ms and 7875ms
    assert_eq_float(kps.average, 64.0 / 7.875);
    assert_eq_float(kps.max, 8.0);
}

#[test]
fn analysis() {
    let analysis = mixed_4k().analysis(1000.0);

    assert_eq!(analysis.hold_note_counts, vec![6, 0, 0, 0]);
    assert_eq!(analysis.column_counts, vec![6, 13, 13, 12]);
    assert_eq!(analysis.kps.values, vec![10.0, 8.0, 9.0, 9.0, 8.0, 6.0]);
    assert_eq_float(analysis.kps.max, 10.0);
}

#[test]
fn suspicion() {
    assert!(mixed_4k().check_suspicion().is_ok());

    let dense = Chart::new(stream(4, 1000, 1.0), 4);
    assert!(matches!(
        dense.check_suspicion(),
        Err(TooSuspicious::Density)
    ));

    let err = dense.check_suspicion().unwrap_err();
    assert_eq!(
        err.to_string(),
        "the chart seems too suspicious for further calculation (reason=Density)"
    );
}
