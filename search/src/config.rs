use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use evaluation::{PieceValues, Score};

use crate::engine::SearchLimits;
use crate::MAX_PLY;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:expr, $range:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        name: $name,
                        value: $default,
                        range: $range,
                    },)*
                }
            }
        }

        impl EngineConfig {
            /// Sets an option by its name (case-insensitive) from a string value.
            pub fn update(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $(n if n.eq_ignore_ascii_case($name) => self.$field.update(value),)*
                    _ => Err(format!("Unknown option: {}", name)),
                }
            }

            /// Every option as `(name, current value)`.
            pub fn options(&self) -> Vec<(&'static str, String)> {
                vec![$(($name, self.$field.value.to_string()),)*]
            }
        }
    };
}

define_config!(
    // Transposition table size in megabytes
    (hash_size: usize, "Hash", Some((1, 4096)), 64),

    // Iterative deepening
    (min_depth: usize, "MinDepth", Some((1, MAX_PLY - 1)), 2), // Depth searched before the clock is consulted
    (max_depth: usize, "MaxDepth", Some((1, MAX_PLY - 1)), 64),
    (move_time: u64, "MoveTime", Some((0, 3_600_000)), 2000), // Milliseconds

    (own_book: bool, "OwnBook", None, true),

    // Piece values
    (pawn_value: Score, "PawnValue", Some((0, 2000)), 100),
    (knight_value: Score, "KnightValue", Some((0, 2000)), 320),
    (bishop_value: Score, "BishopValue", Some((0, 2000)), 330),
    (rook_value: Score, "RookValue", Some((0, 3000)), 500),
    (queen_value: Score, "QueenValue", Some((0, 5000)), 900),
);

impl EngineConfig {
    pub fn get_piece_values(&self) -> PieceValues {
        PieceValues {
            pawn: self.pawn_value.value,
            knight: self.knight_value.value,
            bishop: self.bishop_value.value,
            rook: self.rook_value.value,
            queen: self.queen_value.value,
        }
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time.value)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.move_time(),
            min_depth: self.min_depth.value,
            max_depth: self.max_depth.value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub name: &'static str,
    pub value: T,
    /// Inclusive bounds, if the option has any.
    pub range: Option<(T, T)>,
}

impl<T> ConfigParam<T>
where
    T: FromStr + Display + PartialOrd + Clone,
    T::Err: Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: parse error: {}", self.name, e))?;

        if let Some((min, max)) = &self.range {
            if new_value < *min || new_value > *max {
                return Err(format!(
                    "{}: {} is outside {}..={}",
                    self.name, new_value, min, max
                ));
            }
        }

        self.value = new_value;
        Ok(())
    }
}
