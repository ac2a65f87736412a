use analysis::killfeed::counts_at_death;
use analysis::KillFeedLine;
use pretty_assertions::assert_eq;

#[test]
fn only_death_between_samples() {
    let feed = vec![KillFeedLine::new("igneous rock fan", "malding", true)];

    assert_eq!(Some((4, 3)), counts_at_death((4, 3), (3, 3), &feed, "malding"));
}

#[test]
fn replays_new_lines_up_to_the_player() {
    let feed = vec![
        // Already reflected in the previous sample.
        KillFeedLine::new("malding", "Iso", false),
        KillFeedLine::new("zlabobabil", "teammate", true),
        KillFeedLine::new("igneous rock fan", "Malding", true),
        KillFeedLine::new("teammate2", "igneous rock fan", false),
    ];

    // Two allies and one enemy died since the last sample.
    let counts = counts_at_death((5, 4), (3, 3), &feed, "malding");

    assert_eq!(Some((4, 4)), counts);
}

#[test]
fn player_not_among_new_lines() {
    let feed = vec![
        KillFeedLine::new("igneous rock fan", "malding", true),
        KillFeedLine::new("zlabobabil", "teammate", true),
    ];

    assert_eq!(None, counts_at_death((5, 4), (4, 4), &feed, "malding"));
    assert_eq!(None, counts_at_death((5, 4), (5, 4), &feed, "malding"));
    assert_eq!(None, counts_at_death((5, 4), (4, 4), &[], "malding"));
}
