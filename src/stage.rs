/// Stage table: the two hard-coded parameter sets.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    pub fn number(&self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageParams {
    pub bg_file: &'static str,
    /// Pixels the backdrop scrolls per tick.
    pub bg_speed: i32,
    /// Pixels an enemy travels per tick.
    pub enemy_speed: i32,
    /// Ticks between enemy spawns.
    pub spawn_interval: u64,
}

pub fn stage_params(stage: Stage) -> StageParams {
    match stage {
        Stage::One => StageParams {
            bg_file: "bg_1.jpg",
            bg_speed: 4,
            enemy_speed: 7,
            spawn_interval: 60,
        },
        Stage::Two => StageParams {
            bg_file: "bg_2.jpg",
            bg_speed: 6,
            enemy_speed: 9,
            spawn_interval: 45,
        },
    }
}
