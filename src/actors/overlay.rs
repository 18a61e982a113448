use actix::{Actor, ActorContext, Context, Handler, Message, MessageResult};
use tracing::info;

use crate::session::{Key, OverlaySession};
use crate::view::OverlayView;
use crate::words::WordList;

/// Message carrying one keystroke or hotkey
#[derive(Message)]
#[rtype(result = "Option<OverlayView>")]
pub struct KeyPress(pub Key);

/// Message to read the current view without changing anything
#[derive(Message)]
#[rtype(result = "OverlayView")]
pub struct GetView;

/// Actor that owns the overlay session and applies keys in arrival order
pub struct OverlayActor {
    session: OverlaySession,
}

impl OverlayActor {
    pub fn new(word_list: WordList, limit: usize) -> Self {
        Self {
            session: OverlaySession::new(word_list, limit),
        }
    }
}

impl Actor for OverlayActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!(
            "OverlayActor started with {} words",
            self.session.word_list().len()
        );
    }

    fn stopped(&mut self, _ctx: &mut Context<Self>) {
        info!(
            "OverlayActor stopped (score {}, longest {})",
            self.session.round().score(),
            self.session.round().longest_word().unwrap_or("<none>")
        );
    }
}

impl Handler<KeyPress> for OverlayActor {
    type Result = Option<OverlayView>;

    fn handle(&mut self, msg: KeyPress, ctx: &mut Context<Self>) -> Self::Result {
        let view = self.session.handle_key(msg.0);

        if self.session.has_quit() {
            ctx.stop();
        }

        view
    }
}

impl Handler<GetView> for OverlayActor {
    type Result = MessageResult<GetView>;

    fn handle(&mut self, _msg: GetView, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.session.view())
    }
}
