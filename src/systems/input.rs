//! Input systems.
//!
//! - [`update_input_state`] copies the tick's
//!   [`InputSnapshot`](crate::resources::input::InputSnapshot) into
//!   [`InputState`](crate::resources::input::InputState), computing
//!   press/release edges against the previous tick.
use bevy_ecs::prelude::*;

use crate::resources::input::{InputSnapshot, InputState};

/// Sample the current snapshot into the `InputState` resource.
pub fn update_input_state(snapshot: Res<InputSnapshot>, mut input: ResMut<InputState>) {
    input.left.update(snapshot.left);
    input.right.update(snapshot.right);
    input.jump.update(snapshot.jump);
    input.restart.update(snapshot.restart);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::HorizontalIntent;

    fn run_with(world: &mut World, snapshot: InputSnapshot) {
        world.insert_resource(snapshot);
        let mut schedule = Schedule::default();
        schedule.add_systems(update_input_state);
        schedule.run(world);
    }

    #[test]
    fn edges_follow_snapshots() {
        let mut world = World::new();
        world.insert_resource(InputState::default());

        run_with(&mut world, InputSnapshot::jump());
        let input = *world.resource::<InputState>();
        assert!(input.jump.active);
        assert!(input.jump.just_pressed);

        run_with(&mut world, InputSnapshot::jump());
        let input = *world.resource::<InputState>();
        assert!(input.jump.active);
        assert!(!input.jump.just_pressed);

        run_with(&mut world, InputSnapshot::idle());
        let input = *world.resource::<InputState>();
        assert!(!input.jump.active);
        assert!(input.jump.just_released);
    }

    #[test]
    fn horizontal_intent_from_snapshot() {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        run_with(&mut world, InputSnapshot::left());
        assert_eq!(
            world.resource::<InputState>().horizontal(),
            HorizontalIntent::Left
        );
    }
}
