use proptest::prelude::*;
use rosu_sr::{calculate_star_rating, Chart, Difficulty, Note};

fn arb_chart() -> impl Strategy<Value = Chart> {
    (1_usize..=10).prop_flat_map(|columns| {
        let note = (
            0..columns,
            // coarse times so that stacked notes and shared tails come up
            (0_u32..250).prop_map(|step| f64::from(step) * 20.0),
            prop::option::weighted(0.25, (1_u32..40).prop_map(|step| f64::from(step) * 20.0)),
        )
            .prop_map(|(column, start_time, len)| match len {
                Some(len) => Note::hold(column, start_time, start_time + len),
                None => Note::tap(column, start_time),
            });

        prop::collection::vec(note, 0..60)
            .prop_map(move |notes| Chart::new(notes, columns))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..Default::default()
    })]

    #[test]
    fn finite_and_non_negative(
        chart in arb_chart(),
        od in 0.0_f64..=10.0,
        rate in 0.5_f64..=2.0,
    ) {
        let stars = calculate_star_rating(&chart.notes, chart.columns, od, rate).unwrap();

        prop_assert!(stars.is_finite());
        prop_assert!(stars >= 0.0);
    }

    #[test]
    fn deterministic(chart in arb_chart(), mods in prop::sample::select(vec![0_u32, 2, 16, 64, 256])) {
        let first = chart.difficulty().mods(mods).calculate().unwrap();
        let second = Difficulty::new().mods(mods).calculate(&chart).unwrap();

        prop_assert_eq!(first.stars.to_bits(), second.stars.to_bits());
    }

    #[test]
    fn input_order_is_irrelevant(chart in arb_chart()) {
        let mut shuffled = chart.clone();
        shuffled.notes.reverse();

        let stars = chart.difficulty().calculate().unwrap().stars;
        let shuffled_stars = shuffled.difficulty().calculate().unwrap().stars;

        prop_assert_eq!(stars.to_bits(), shuffled_stars.to_bits());
    }

    #[test]
    fn strains_are_non_negative(chart in arb_chart()) {
        let strains = chart.difficulty().strains().unwrap();

        prop_assert!(strains.strains.iter().all(|strain| strain.is_finite() && *strain >= 0.0));
    }
}
