//! The session hub: single owner of the game session.
//!
//! Every participant action, disconnect and letter tick is a message in
//! this actor's mailbox, so transitions run one at a time in arrival order.
//! Outbound messages are fire-and-forget `do_send`s to connection actors.

use std::collections::HashMap;
use std::time::Duration;

use actix::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::events::{Audience, SessionEvent};
use crate::domain::session::{Session, SessionSettings};
use crate::domain::snapshot::{summarize, SessionSummary};
use crate::domain::state::ParticipantId;
use crate::services::game_flow::{FlowResult, GameFlowService};
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// A rendered message for one connection.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: ParticipantId,
    pub recipient: Recipient<Outbound>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ParticipantId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Inbound {
    pub conn_id: ParticipantId,
    pub msg: ClientMsg,
}

#[derive(Message)]
#[rtype(result = "SessionSummary")]
pub struct GetSummary;

/// Number of registered connections, joined or not.
#[derive(Message)]
#[rtype(result = "usize")]
pub struct ActiveConnections;

struct Ticker {
    generation: u64,
    handle: SpawnHandle,
}

pub struct SessionHub {
    session: Session,
    flow: GameFlowService,
    connections: HashMap<ParticipantId, Recipient<Outbound>>,
    tick_interval: Duration,
    ticker: Option<Ticker>,
}

impl SessionHub {
    pub fn new(settings: SessionSettings, tick_interval: Duration) -> Self {
        Self {
            session: Session::new(settings),
            flow: GameFlowService,
            connections: HashMap::new(),
            tick_interval,
            ticker: None,
        }
    }

    fn dispatch(&self, events: &[SessionEvent]) {
        for event in events {
            match event.audience() {
                Audience::Everyone => {
                    for player in self.session.participants() {
                        self.send_to(player.id, event);
                    }
                }
                Audience::Only(id) => self.send_to(id, event),
            }
        }
    }

    fn send_to(&self, id: ParticipantId, event: &SessionEvent) {
        if let Some(recipient) = self.connections.get(&id) {
            recipient.do_send(Outbound(ServerMsg::render(event, id)));
        }
    }

    /// Broadcast an accepted operation's events, or log and drop a rejection.
    fn settle(
        &mut self,
        conn_id: ParticipantId,
        action: &'static str,
        result: FlowResult,
        ctx: &mut Context<Self>,
    ) {
        match result {
            Ok(events) => {
                debug!(
                    participant_id = %conn_id,
                    action,
                    events = events.len(),
                    version = self.session.version(),
                    "Action applied"
                );
                self.dispatch(&events);
            }
            Err(err) => {
                debug!(participant_id = %conn_id, action, error = %err, "Action rejected");
            }
        }
        self.sync_ticker(ctx);
    }

    /// Make the running ticker match the session's letter selection.
    ///
    /// A ticker is only ever bound to one generation; any change cancels it
    /// and, if a new selection is active, starts a fresh one.
    fn sync_ticker(&mut self, ctx: &mut Context<Self>) {
        let wanted = self.session.selection().map(|s| s.generation);
        let running = self.ticker.as_ref().map(|t| t.generation);
        if wanted == running {
            return;
        }

        if let Some(ticker) = self.ticker.take() {
            ctx.cancel_future(ticker.handle);
            debug!(generation = ticker.generation, "Letter ticker stopped");
        }

        if let Some(generation) = wanted {
            let handle = ctx.run_interval(self.tick_interval, move |hub, ctx| {
                hub.on_tick(generation, ctx);
            });
            self.ticker = Some(Ticker { generation, handle });
            debug!(generation, "Letter ticker started");
        }
    }

    fn on_tick(&mut self, generation: u64, ctx: &mut Context<Self>) {
        match self.flow.tick_letter(&mut self.session, generation) {
            Ok(events) => self.dispatch(&events),
            Err(err) => debug!(generation, error = %err, "Dropped letter tick"),
        }
        self.sync_ticker(ctx);
    }

    fn apply(&mut self, conn_id: ParticipantId, msg: ClientMsg) -> FlowResult {
        let flow = self.flow;
        let session = &mut self.session;
        match msg {
            ClientMsg::Join { name } => flow.join(session, conn_id, &name),
            ClientMsg::SetColumns { labels } => flow.set_columns(session, conn_id, &labels),
            ClientMsg::StartRound => flow.start_round(session, conn_id),
            ClientMsg::StopSelection => flow.stop_selection(session, conn_id),
            ClientMsg::UpdateAnswer { column_index, text } => {
                flow.update_answer(session, conn_id, column_index, &text)
            }
            ClientMsg::StopRound => flow.stop_round(session, conn_id),
            ClientMsg::SubmitVote {
                subject_id,
                column_index,
                accept,
            } => flow.submit_vote(session, conn_id, subject_id, column_index, accept),
            ClientMsg::ResetGame => flow.reset_game(session, conn_id),
        }
    }
}

impl Actor for SessionHub {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(
            max_rounds = self.session.max_rounds(),
            columns = self.session.columns().len(),
            tick_ms = self.tick_interval.as_millis() as u64,
            "[HUB] started"
        );
    }
}

impl Handler<Connect> for SessionHub {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        if self.connections.insert(msg.conn_id, msg.recipient).is_some() {
            warn!(conn_id = %msg.conn_id, "[HUB] connection registered twice");
        }
        debug!(conn_id = %msg.conn_id, connections = self.connections.len(), "[HUB] connected");
    }
}

impl Handler<Disconnect> for SessionHub {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, ctx: &mut Self::Context) -> Self::Result {
        self.connections.remove(&msg.conn_id);
        debug!(conn_id = %msg.conn_id, connections = self.connections.len(), "[HUB] disconnected");

        // Connections that never joined leave nothing behind.
        if self.session.is_participant(msg.conn_id) {
            let result = self.flow.leave(&mut self.session, msg.conn_id);
            self.settle(msg.conn_id, "leave", result, ctx);
        }
    }
}

impl Handler<Inbound> for SessionHub {
    type Result = ();

    fn handle(&mut self, msg: Inbound, ctx: &mut Self::Context) -> Self::Result {
        let action = msg.msg.kind();
        let result = self.apply(msg.conn_id, msg.msg);
        self.settle(msg.conn_id, action, result, ctx);
    }
}

impl Handler<GetSummary> for SessionHub {
    type Result = MessageResult<GetSummary>;

    fn handle(&mut self, _msg: GetSummary, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(summarize(&self.session))
    }
}

impl Handler<ActiveConnections> for SessionHub {
    type Result = usize;

    fn handle(&mut self, _msg: ActiveConnections, _ctx: &mut Self::Context) -> Self::Result {
        self.connections.len()
    }
}
