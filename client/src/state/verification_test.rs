use super::*;

#[test]
fn fresh_cooldown_allows_resend() {
    let cooldown = ResendCooldown::default();
    assert!(cooldown.can_resend());
    assert_eq!(cooldown.button_label(), "Resend code");
}

#[test]
fn resend_disabled_for_exactly_thirty_seconds() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    assert!(!cooldown.can_resend());

    for second in 1..RESEND_COOLDOWN_SECS {
        assert!(cooldown.tick(), "still running after {second}s");
        assert!(!cooldown.can_resend(), "disabled after {second}s");
    }

    assert!(!cooldown.tick());
    assert!(cooldown.can_resend());
    assert_eq!(cooldown.remaining_secs(), 0);
}

#[test]
fn tick_when_idle_stays_at_zero() {
    let mut cooldown = ResendCooldown::default();
    assert!(!cooldown.tick());
    assert_eq!(cooldown.remaining_secs(), 0);
}

#[test]
fn restart_resets_to_full_duration() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    cooldown.tick();
    cooldown.tick();
    cooldown.start();
    assert_eq!(cooldown.remaining_secs(), RESEND_COOLDOWN_SECS);
}

#[test]
fn label_counts_down() {
    let mut cooldown = ResendCooldown::default();
    cooldown.start();
    assert_eq!(cooldown.button_label(), "Resend code in 30s");
    cooldown.tick();
    assert_eq!(cooldown.button_label(), "Resend code in 29s");
}
