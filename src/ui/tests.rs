use super::hud_player::healthbar_color;

#[test]
fn test_healthbar_full_is_green() {
    let color = healthbar_color(1.0).to_srgba();
    assert!(color.green > color.red);
}

#[test]
fn test_healthbar_empty_is_red() {
    let color = healthbar_color(0.0).to_srgba();
    assert!(color.red > color.green);
}
