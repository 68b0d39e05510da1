#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Emitting { tick: u32 },
    Closed,
}

/// Moves a stream session one step forward for a session of `ticks` values.
pub fn advance(state: StreamState, ticks: u32) -> StreamState {
    match state {
        StreamState::Idle if ticks > 0 => StreamState::Emitting { tick: 0 },
        StreamState::Emitting { tick } if tick + 1 < ticks => {
            StreamState::Emitting { tick: tick + 1 }
        }
        _ => StreamState::Closed,
    }
}
