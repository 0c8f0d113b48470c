pub mod keyboard;
pub mod remote;

pub use keyboard::{InputHandler, KeyAction, KeyRemote};
pub use remote::{dispatch, heading_for, RemoteReceiver};
pub use remote::{CODE_DOWN, CODE_LEFT, CODE_RIGHT, CODE_UP};
