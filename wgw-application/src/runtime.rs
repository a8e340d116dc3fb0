use crate::{prelude::*, usecases::SuggestionRequest, *};
use std::{
    collections::VecDeque,
    sync::{mpsc, Arc},
    thread,
    time::{Duration, Instant},
};

/// Executes the effects of the [`MapController`].
///
/// Geocoding lookups are performed on background threads
/// and their results are fed back through a channel.
pub struct Runtime<L, R> {
    controller: MapController,
    geocoding: Arc<dyn GeocodingGateway + Send + Sync + 'static>,
    geolocation: L,
    renderer: R,
    events_tx: mpsc::Sender<UiEvent>,
    events_rx: mpsc::Receiver<UiEvent>,
    pending_lookups: usize,
}

impl<L, R> Runtime<L, R>
where
    L: GeolocationGateway,
    R: MapRenderer,
{
    pub fn new<G>(settings: Settings, geocoding: G, geolocation: L, renderer: R) -> Self
    where
        G: GeocodingGateway + Send + Sync + 'static,
    {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            controller: MapController::new(settings),
            geocoding: Arc::new(geocoding),
            geolocation,
            renderer,
            events_tx,
            events_rx,
            pending_lookups: 0,
        }
    }

    pub fn controller(&self) -> &MapController {
        &self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn pending_lookups(&self) -> usize {
        self.pending_lookups
    }

    pub fn start(&mut self) {
        let effects = self.controller.start();
        self.execute_all(effects);
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = self.controller.handle(event);
        self.execute_all(effects);
    }

    pub fn tick(&mut self, now: Instant) {
        self.dispatch(UiEvent::Tick(now));
    }

    /// Dispatch all lookup results that have arrived in the meantime.
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.received(event);
            count += 1;
        }
        count
    }

    /// Block until the most recent lookup has been answered.
    ///
    /// Superseded lookups are not waited for, their results are
    /// discarded whenever they arrive. Returns `false` if the
    /// timeout elapsed before.
    pub fn wait_for_lookups(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.controller.session().pending_request().is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events_rx.recv_timeout(remaining) {
                Ok(event) => self.received(event),
                Err(_) => return false,
            }
        }
        true
    }

    fn received(&mut self, event: UiEvent) {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);
        self.dispatch(event);
    }

    fn execute_all(&mut self, effects: Vec<Effect>) {
        // Synchronous answers are handled before returning
        let mut queue = VecDeque::new();
        for effect in effects {
            self.execute(effect, &mut queue);
        }
        while let Some(event) = queue.pop_front() {
            for effect in self.controller.handle(event) {
                self.execute(effect, &mut queue);
            }
        }
    }

    fn execute(&mut self, effect: Effect, queue: &mut VecDeque<UiEvent>) {
        match effect {
            Effect::Render(cmd) => self.renderer.render(cmd),
            Effect::Geocode(req) => self.spawn_lookup(req),
            Effect::Locate => {
                let position = self.geolocation.current_position();
                queue.push_back(UiEvent::Located(position));
            }
        }
    }

    fn spawn_lookup(&mut self, req: SuggestionRequest) {
        let SuggestionRequest { seq, query } = req;
        let gateway = Arc::clone(&self.geocoding);
        let events_tx = self.events_tx.clone();
        let max_suggestions = self.controller.settings().map.max_suggestions;
        self.pending_lookups += 1;
        thread::spawn(move || {
            let result = usecases::fetch_suggestions(&*gateway, &query, max_suggestions);
            if events_tx
                .send(UiEvent::SuggestionsReceived { seq, result })
                .is_err()
            {
                log::debug!("Dropping suggestions of request {seq}: event loop is gone");
            }
        });
    }
}
