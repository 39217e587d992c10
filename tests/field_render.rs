// tests/field_render.rs
use rover_fleet::{Error, Fleet, FleetConfig};

#[test]
fn test_empty_field_is_deterministic() {
    let fleet = Fleet::new(3, 2).unwrap();
    let first = fleet.render();
    assert_eq!(first, "1\t~\t~\t~\n0\t~\t~\t~\nX\t0\t1\t2");
    assert_eq!(first, fleet.render());
}

#[test]
fn test_rovers_drawn_with_index_and_arrow() {
    let mut fleet = Fleet::new(3, 2).unwrap();
    fleet.deploy_rover(0, 0, 0, None).unwrap();
    fleet.deploy_rover(1, 2, 1, None).unwrap();
    fleet.deploy_rover(3, 1, 0, None).unwrap();

    // Highest y is the first row.
    assert_eq!(
        fleet.render(),
        "1\t~\t~\t1^\n0\t0>\t2V\t~\nX\t0\t1\t2"
    );
}

#[test]
fn test_shared_cell_lists_every_index() {
    let mut fleet = Fleet::new(2, 1).unwrap();
    for _ in 0..12 {
        fleet.deploy_rover(2, 1, 0, None).unwrap();
    }
    fleet.deploy_rover(0, 0, 0, None).unwrap();

    assert_eq!(
        fleet.render(),
        "0\t12>\t0,1,2,3,4,5,6,7,8,9,10,11\nX\t0\t1"
    );
}

#[test]
fn test_render_config_is_applied() {
    let config: FleetConfig = r#"
        [render]
        empty_cell = "."
        separator = " "
        collision_delimiter = "/"
    "#
    .parse()
    .unwrap();
    let mut fleet = Fleet::with_config(2, 2, config).unwrap();
    fleet.deploy_rover(1, 1, 1, None).unwrap();
    fleet.deploy_rover(3, 1, 1, None).unwrap();

    assert_eq!(fleet.render(), "1 . 0/1\n0 . .\nX 0 1");
}

#[test]
fn test_fleet_display_lists_rovers_then_field() {
    let mut fleet = Fleet::new(2, 2).unwrap();
    fleet.deploy_rover(1, 0, 1, Some("Spirit")).unwrap();
    fleet.deploy_rover(0, 1, 0, None).unwrap();

    let expected = "Area: 2x2\nRovers:\n\t0) Spirit: N @ (0, 1)\n\t1) E @ (1, 0)\n\n\
                    1\t0^\t~\n0\t~\t1>\nX\t0\t1";
    assert_eq!(fleet.to_string(), expected);
}

#[test]
fn test_oversized_field_is_not_drawn() {
    let mut fleet = Fleet::new(100_000, 100_000).unwrap();
    fleet.deploy_rover(0, 0, 0, None).unwrap();
    match fleet.render_checked() {
        Err(Error::FieldTooLarge { cells, max }) => {
            assert_eq!(cells, 10_000_000_000);
            assert_eq!(max, 1_000_000);
        }
        other => panic!("expected FieldTooLarge, got {other:?}"),
    }

    let small = Fleet::new(3, 2).unwrap();
    assert_eq!(small.render_checked().unwrap(), small.render());
}
