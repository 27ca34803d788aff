use crate::point::PointSet;
use crate::spring::Spring;

/// Update the stress counter of every live spring and break the fatigued
/// ones. Returns how many springs broke in this pass.
///
/// A spring breaks only when it is past its threshold *and* has been
/// over-stressed for [`STRESS_FRAME_LIMIT`](crate::spring::STRESS_FRAME_LIMIT)
/// steps, so a single violent spike does not snap it.
pub fn update_spring_breaking(springs: &mut [Spring], points: &PointSet) -> usize {
    let mut broken = 0;
    for spring in springs.iter_mut().filter(|s| !s.broken) {
        let stretch = spring.stretch(points);
        spring.record_stress(stretch);
        if spring.should_break(stretch) {
            spring.broken = true;
            broken += 1;
        }
    }
    if broken > 0 {
        log::debug!("{} spring(s) broke under sustained stress", broken);
    }
    broken
}
