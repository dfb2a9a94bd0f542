use wedding_budget_rs::models::{Category, PlannerInput, Scenario};
use wedding_budget_rs::planner::{
    bar_total, cake_total, catering_total, derive_breakdown, preset_rows, scale_percent,
    total_for, SERVICE_TAX_PERCENT,
};

fn scenario_input() -> PlannerInput {
    PlannerInput {
        guests: 170,
        include_service_tax: true,
        byo_overhead: 800,
        venue: 5000,
        church: 1000,
        photography: 3500,
        dj: 1300,
        florals: 5000,
        catering_per_guest: 80,
        bar_per_guest: 35,
        cake_per_guest: 6,
        misc: 7000,
        add_video: false,
        video_cost: 0,
    }
}

#[test]
fn test_reference_scenario() {
    let breakdown = derive_breakdown(&scenario_input()).unwrap();

    assert_eq!(breakdown.get(Category::Catering), Some(17408));
    assert_eq!(breakdown.get(Category::Bar), Some(6750));
    assert_eq!(breakdown.get(Category::CakeDesserts), Some(1020));
    assert_eq!(breakdown.get(Category::Videography), None);
    assert_eq!(breakdown.total(), 47978);
}

#[test]
fn test_category_names_in_fixed_order() {
    let breakdown = derive_breakdown(&scenario_input()).unwrap();
    assert_eq!(
        breakdown.category_names(),
        vec![
            "Church Fees",
            "Reception Venue",
            "Catering",
            "Bar (BYO)",
            "Photography",
            "DJ / Entertainment",
            "Flowers & Decor",
            "Cake & Desserts",
            "Misc. & Extras",
        ]
    );
}

#[test]
fn test_videography_only_with_positive_cost() {
    let with_video = PlannerInput {
        add_video: true,
        video_cost: 2500,
        ..scenario_input()
    };
    let breakdown = derive_breakdown(&with_video).unwrap();
    assert_eq!(breakdown.len(), 10);
    assert_eq!(breakdown.get(Category::Videography), Some(2500));
    assert_eq!(breakdown.total(), 47978 + 2500);

    // Cost set but toggle off
    let toggled_off = PlannerInput {
        add_video: false,
        video_cost: 2500,
        ..scenario_input()
    };
    assert_eq!(derive_breakdown(&toggled_off).unwrap().len(), 9);
}

#[test]
fn test_total_matches_independent_recompute() {
    for guests in (150..=200).step_by(5) {
        for catering_per_guest in (40..=140).step_by(25) {
            for include_service_tax in [true, false] {
                let input = PlannerInput {
                    guests,
                    catering_per_guest,
                    include_service_tax,
                    ..scenario_input()
                };
                let breakdown = derive_breakdown(&input).unwrap();

                let expected = input.church as u64
                    + input.venue as u64
                    + catering_total(guests, catering_per_guest, include_service_tax)
                    + bar_total(guests, input.bar_per_guest, input.byo_overhead)
                    + input.photography as u64
                    + input.dj as u64
                    + input.florals as u64
                    + cake_total(guests, input.cake_per_guest)
                    + input.misc as u64;

                assert_eq!(breakdown.total(), expected);
                assert_eq!(
                    breakdown.total(),
                    breakdown.iter().map(|e| e.amount).sum::<u64>()
                );
            }
        }
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let input = PlannerInput {
        add_video: true,
        video_cost: 4100,
        ..scenario_input()
    };
    assert_eq!(
        derive_breakdown(&input).unwrap(),
        derive_breakdown(&input).unwrap()
    );
}

#[test]
fn test_per_guest_costs_monotonic_in_guests() {
    let mut previous: Option<(u64, u64, u64)> = None;

    for guests in 150..=200 {
        let input = PlannerInput {
            guests,
            ..scenario_input()
        };
        let breakdown = derive_breakdown(&input).unwrap();
        let current = (
            breakdown.get(Category::Catering).unwrap(),
            breakdown.get(Category::Bar).unwrap(),
            breakdown.get(Category::CakeDesserts).unwrap(),
        );

        if let Some(prev) = previous {
            assert!(current.0 >= prev.0, "catering decreased at {} guests", guests);
            assert!(current.1 >= prev.1, "bar decreased at {} guests", guests);
            assert!(current.2 >= prev.2, "cake decreased at {} guests", guests);
        }
        previous = Some(current);
    }
}

#[test]
fn test_tax_toggle_scales_catering() {
    for catering_per_guest in 40..=140 {
        let taxed = PlannerInput {
            catering_per_guest,
            include_service_tax: true,
            ..scenario_input()
        };
        let untaxed = PlannerInput {
            include_service_tax: false,
            ..taxed
        };

        let with_tax = derive_breakdown(&taxed).unwrap().get(Category::Catering).unwrap();
        let without_tax = derive_breakdown(&untaxed)
            .unwrap()
            .get(Category::Catering)
            .unwrap();

        assert_eq!(without_tax, 170 * catering_per_guest as u64);
        assert_eq!(with_tax, scale_percent(without_tax, SERVICE_TAX_PERCENT));
        let exact = without_tax as f64 * 1.28;
        assert!((with_tax as f64 - exact).abs() <= 0.5);
    }
}

#[test]
fn test_out_of_range_names_field() {
    let cases = [
        (PlannerInput { guests: 210, ..scenario_input() }, "guests"),
        (PlannerInput { venue: 1999, ..scenario_input() }, "venue"),
        (PlannerInput { cake_per_guest: 13, ..scenario_input() }, "cake_per_guest"),
        (
            PlannerInput {
                add_video: true,
                video_cost: 400,
                ..scenario_input()
            },
            "video_cost",
        ),
    ];

    for (input, field) in cases {
        let err = derive_breakdown(&input).unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert!(err.to_string().contains(field));
    }
}

#[test]
fn test_preset_totals() {
    assert_eq!(total_for(Scenario::Low), 23250);
    assert_eq!(total_for(Scenario::Mid), 42750);
    assert_eq!(total_for(Scenario::High), 66100);

    let categories: Vec<&str> = preset_rows().iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            "Church Fees",
            "Reception Venue",
            "Catering + Bar",
            "Photography",
            "DJ / Entertainment",
            "Flowers & Decor",
            "Cake & Desserts",
            "Misc. & Extras",
        ]
    );
    assert!(preset_rows().iter().all(|r| r.source_url.starts_with("https://")));
}
