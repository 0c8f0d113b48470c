use crate::game::{Heading, SnakeBody};

/// NEC scan code sent by the handset's volume-up button (steer up).
pub const CODE_UP: u32 = 0x00FD807F;
/// NEC scan code sent by the volume-down button (steer down).
pub const CODE_DOWN: u32 = 0x00FD906F;
/// NEC scan code sent by the previous-track button (steer left).
pub const CODE_LEFT: u32 = 0x00FD20DF;
/// NEC scan code sent by the next-track button (steer right).
pub const CODE_RIGHT: u32 = 0x00FD609F;

/// Non-blocking source of decoded remote commands.
///
/// The hardware decoder holds a captured frame until it is re-armed, so
/// [`RemoteReceiver::resume`] must be called after every code handed out by
/// [`RemoteReceiver::poll`], mapped or not; an unrecognized button must not
/// wedge the receiver.
pub trait RemoteReceiver {
    /// Returns the next decoded scan code, if one has arrived.
    fn poll(&mut self) -> Option<u32>;

    /// Re-arms the decoder for the next transmission.
    fn resume(&mut self);
}

/// Maps a scan code to the heading it commands.
pub fn heading_for(code: u32) -> Option<Heading> {
    match code {
        CODE_UP => Some(Heading::Up),
        CODE_DOWN => Some(Heading::Down),
        CODE_LEFT => Some(Heading::Left),
        CODE_RIGHT => Some(Heading::Right),
        _ => None,
    }
}

/// Polls the receiver once and applies any decoded command to the snake.
///
/// A recognized code overwrites the heading unconditionally; reversals are
/// not filtered. Unrecognized codes are logged and dropped. Returns the
/// decoded code, if any.
pub fn dispatch<R: RemoteReceiver>(receiver: &mut R, snake: &mut SnakeBody) -> Option<u32> {
    let code = receiver.poll()?;
    tracing::debug!(code = %format_args!("{code:06X}"), "remote command received");
    if let Some(heading) = heading_for(code) {
        snake.heading = heading;
    }
    receiver.resume();
    Some(code)
}
