use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use space_invaders::config::*;

#[test]
fn defaults_match_arcade_layout() {
    let c = Config::default();
    assert_eq!((c.screen_width, c.screen_height), (750.0, 750.0));
    assert_eq!(c.font_size, 40.0);
    assert_eq!((c.laser_width, c.laser_height), (5.0, 10.0));
    assert_eq!((c.fleet_rows, c.fleet_columns), (5, 11));
    assert_eq!(c.fleet_spacing, 55.0);
    assert_eq!(c.alien_fire_cooldown, Duration::from_millis(800));
    assert_eq!(c.ship_speed, 5.0);
    assert_eq!(c.laser_speed, 5.0);
    assert_eq!(c.starting_lives, 3);
}

#[test]
fn args_default_to_config_defaults() {
    let args = Args::parse_from(["space_invaders"]);
    assert_eq!(args.fps, 60);
    assert_eq!(args.seed, None);
    assert_eq!(args.log_file, PathBuf::from("space_invaders.log"));
    assert_eq!(args.to_config(), Config::default());
}

#[test]
fn args_override_lives_and_seed() {
    let args = Args::parse_from(["space_invaders", "--lives", "5", "--seed", "7"]);
    assert_eq!(args.seed, Some(7));
    assert_eq!(args.to_config().starting_lives, 5);
}

#[test]
fn lives_outside_range_are_rejected() {
    for lives in ["0", "-3", "100", "2000000000"] {
        let parsed = Args::try_parse_from(["space_invaders", "--lives", lives]);
        assert!(parsed.is_err(), "--lives {lives} accepted");
    }
    let args = Args::parse_from(["space_invaders", "--lives", "99"]);
    assert_eq!(args.to_config().starting_lives, MAX_LIVES);
}

#[test]
fn hand_built_args_are_clamped() {
    let mut args = Args::parse_from(["space_invaders"]);
    args.lives = 2_000_000_000;
    assert_eq!(args.to_config().starting_lives, MAX_LIVES);
    args.lives = 0;
    assert_eq!(args.to_config().starting_lives, 1);
}

#[test]
fn frame_length_follows_fps() {
    let args = Args::parse_from(["space_invaders", "--fps", "30"]);
    assert_eq!(args.frame(), Duration::from_nanos(33_333_333));

    let args = Args::parse_from(["space_invaders", "--fps", "0"]);
    assert_eq!(args.frame(), Duration::from_secs(1));
}
