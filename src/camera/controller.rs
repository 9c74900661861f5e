//! Navigations-Kamera-Controller: Modus-State-Machine und
//! Attach/Detach-Lebenszyklus über einer Render-Engine.

use crate::core::{EdgeInsets, MatchedLocation, Route, RouteProgress, ScreenRect};
use crate::engine::{CameraOptions, MapCameraEngine, TransitionOptions};
use crate::shared::{options, CameraTuning};

use super::padding;
use super::{CameraMode, ViewportDataSource};

/// An die Surface gebundener Zustand einer Attach-Phase.
///
/// Wird beim `detach` als Ganzes verworfen, damit Engine-Handle,
/// Data-Source und One-Shot-Flag garantiert gemeinsam freigegeben
/// werden.
struct AttachedSurface<E> {
    engine: E,
    viewport: ViewportDataSource,
    location_initialized: bool,
}

/// Modus-State-Machine der Navigations-Kamera.
///
/// Verarbeitet Positions-, Routen-, Gesten- und Geometrie-Events auf
/// genau einem logischen Ausführungskontext (Single-Writer, keine
/// interne Synchronisation) und gibt pro Event höchstens ein
/// Kamera-Kommando an die Engine aus. Alle Mutatoren sind vor
/// `attach` und nach `detach` sichere No-Ops.
pub struct NavigationCameraController<E: MapCameraEngine> {
    initial_mode: CameraMode,
    alternate_mode: Option<CameraMode>,
    current_mode: CameraMode,
    next_offered_mode: Option<CameraMode>,
    tuning: CameraTuning,
    attached: Option<AttachedSurface<E>>,
}

impl<E: MapCameraEngine> NavigationCameraController<E> {
    /// Erstellt einen Controller mit Default-Tuning.
    ///
    /// `alternate_mode` ist der zweite automatische Modus, den ein
    /// UI-Toggle anbieten kann; `None`, wenn nur einer existiert.
    /// Invariante: `alternate_mode != initial_mode`.
    pub fn new(initial_mode: CameraMode, alternate_mode: Option<CameraMode>) -> Self {
        Self::with_tuning(initial_mode, alternate_mode, CameraTuning::default())
    }

    /// Erstellt einen Controller mit eigenem Tuning.
    pub fn with_tuning(
        initial_mode: CameraMode,
        alternate_mode: Option<CameraMode>,
        tuning: CameraTuning,
    ) -> Self {
        debug_assert_ne!(Some(initial_mode), alternate_mode);
        Self {
            initial_mode,
            alternate_mode,
            current_mode: CameraMode::Idle,
            next_offered_mode: alternate_mode,
            tuning,
            attached: None,
        }
    }

    /// Bindet den Controller an ein Engine-Handle.
    ///
    /// Wendet `initial_camera` (Default: Zoom 15) einmalig synchron
    /// an, bevor irgendein automatisches Framing läuft, und legt eine
    /// frische [`ViewportDataSource`] an. Ein bereits gebundenes
    /// Handle wird vorher verworfen.
    pub fn attach(&mut self, mut engine: E, initial_camera: Option<CameraOptions>) {
        if self.attached.is_some() {
            log::warn!("attach auf bereits gebundenem Controller, altes Surface wird verworfen");
            self.detach();
        }
        log::info!("Kamera-Controller attach, initial_mode={:?}", self.initial_mode);
        if let Some(camera) = initial_camera {
            engine.set_camera(camera);
        }
        self.attached = Some(AttachedSurface {
            engine,
            viewport: ViewportDataSource::new(&self.tuning),
            location_initialized: false,
        });
    }

    /// Löst die Bindung und verwirft allen transienten Zustand.
    ///
    /// Sicher auch ohne vorheriges `attach`. Nach dem Detach beginnt
    /// eine erneute Attach-Phase sauber bei `Idle` mit
    /// zurückgesetztem One-Shot-Flag.
    pub fn detach(&mut self) -> Option<E> {
        let surface = self.attached.take();
        if surface.is_some() {
            log::info!("Kamera-Controller detach");
        }
        self.current_mode = CameraMode::Idle;
        self.next_offered_mode = self.alternate_mode;
        surface.map(|s| s.engine)
    }

    /// Gibt `true` zurück, wenn der Controller gebunden ist.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Aktueller Kamera-Modus.
    pub fn current_mode(&self) -> CameraMode {
        self.current_mode
    }

    /// Modus, den ein UI-Toggle als nächstes anbieten soll:
    /// immer der jeweils andere automatische Modus.
    pub fn next_offered_mode(&self) -> Option<CameraMode> {
        self.next_offered_mode
    }

    /// Read-only-Zugriff auf das gebundene Engine-Handle.
    pub fn engine(&self) -> Option<&E> {
        self.attached.as_ref().map(|s| &s.engine)
    }

    /// Read-only-Zugriff auf die Data-Source der laufenden
    /// Attach-Phase.
    pub fn viewport(&self) -> Option<&ViewportDataSource> {
        self.attached.as_ref().map(|s| &s.viewport)
    }

    /// Verarbeitet eine neue gematchte Position.
    ///
    /// Die allererste Position nach `attach` platziert die Kamera
    /// sofort (Dauer 0) im `initial_mode`; ein Ease aus undefinierter
    /// Ausgangslage wäre visuell undefiniert. Jede weitere Position
    /// speist nur die Data-Source und aktualisiert das Framing eased.
    pub fn on_location_changed(&mut self, location: MatchedLocation) {
        let Some(surface) = self.attached.as_mut() else {
            log::trace!("Position verworfen: Controller nicht gebunden");
            return;
        };
        surface.viewport.on_location_changed(location);
        surface.viewport.evaluate();
        if !surface.location_initialized {
            surface.location_initialized = true;
            self.current_mode = self.initial_mode;
            self.issue_frame_command(self.initial_mode, TransitionOptions::instant());
        } else {
            self.sync_automatic_frame();
        }
    }

    /// Verarbeitet eine Änderung der aktiven Routenmenge.
    /// Eine leere Menge verwirft die Routen-Geometrie.
    pub fn on_routes_changed(&mut self, routes: &[Route]) {
        let Some(surface) = self.attached.as_mut() else {
            return;
        };
        match routes.first() {
            Some(primary) => surface.viewport.on_route_changed(primary),
            None => surface.viewport.clear_route_data(),
        }
        surface.viewport.evaluate();
        self.sync_automatic_frame();
    }

    /// Verarbeitet einen Routen-Fortschritts-Tick.
    pub fn on_route_progress_changed(&mut self, progress: &RouteProgress) {
        let Some(surface) = self.attached.as_mut() else {
            return;
        };
        surface.viewport.on_route_progress_changed(progress);
        surface.viewport.evaluate();
        self.sync_automatic_frame();
    }

    /// Verarbeitet eine Änderung des sichtbaren Bereichs.
    ///
    /// Berechnet beide Padding-Profile neu und aktualisiert das
    /// Framing. Läuft potenziell hochfrequent (animierte Panels) und
    /// löst deshalb nie eine Modus-Transition aus.
    pub fn on_visible_area_changed(&mut self, visible_area: ScreenRect, edge_insets: EdgeInsets) {
        let Some(surface) = self.attached.as_mut() else {
            return;
        };
        log::debug!(
            "Sichtbarer Bereich geändert: {:?} Insets {:?}",
            visible_area,
            edge_insets
        );
        let pixel_ratio = surface.engine.pixel_ratio();
        surface.viewport.set_overview_padding(padding::overview_profile(
            &edge_insets,
            &self.tuning,
            pixel_ratio,
        ));
        surface.viewport.set_following_padding(padding::following_profile(
            &visible_area,
            &edge_insets,
            &self.tuning,
            pixel_ratio,
        ));
        surface.viewport.evaluate();
        self.sync_automatic_frame();
    }

    /// Wechselt explizit den Kamera-Modus.
    ///
    /// Einziger Pfad, der `current_mode` ändert (neben dem
    /// First-Location-One-Shot). Idempotent im Zustand, nicht im
    /// Seiteneffekt: ein wiederholter Request gibt das Kommando
    /// erneut aus, was harmlos ist.
    pub fn request_mode(&mut self, mode: CameraMode) {
        if self.attached.is_none() {
            log::trace!("request_mode({:?}) verworfen: Controller nicht gebunden", mode);
            return;
        }
        self.next_offered_mode = if mode != self.initial_mode {
            Some(self.initial_mode)
        } else {
            self.alternate_mode
        };
        self.current_mode = mode;
        self.issue_frame_command(
            mode,
            TransitionOptions::with_max_duration(options::STATE_TRANSITION_MAX_MS),
        );
    }

    /// Nutzer-Pan: wirft die Kamera immer aus den automatischen Modi.
    /// Gibt `false` zurück, die Engine soll die Geste normal
    /// weiterverarbeiten.
    pub fn on_pan_gesture(&mut self, delta: glam::DVec2) -> bool {
        log::debug!("Pan-Geste {:?}, erzwinge Idle", delta);
        self.request_mode(CameraMode::Idle);
        false
    }

    /// Nutzer-Pinch/Scale: wirft die Kamera aus den automatischen
    /// Modi. Gibt `true` zurück, wenn der Ziel-Zoom gegen die festen
    /// Grenzen geklemmt wurde; der Aufrufer soll die Geste dann nicht
    /// an das Default-Handling der Engine weiterreichen, damit das
    /// automatische Framing nicht gegen die Geste kämpft.
    pub fn on_scale_gesture(&mut self, _anchor: glam::DVec2, _from_zoom: f64, to_zoom: f64) -> bool {
        self.request_mode(CameraMode::Idle);
        to_zoom.clamp(self.tuning.zoom_min, self.tuning.zoom_max) != to_zoom
    }

    /// Zoom-In-Action-Button.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.tuning.zoom_action_delta);
    }

    /// Zoom-Out-Action-Button.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.tuning.zoom_action_delta);
    }

    /// Addiert `delta` auf den aktuellen Engine-Zoom, klemmt gegen
    /// die Zoom-Grenzen und eased dorthin. Kein Moduswechsel.
    pub fn zoom_by(&mut self, delta: f64) {
        let Some(surface) = self.attached.as_mut() else {
            return;
        };
        let from_zoom = surface.engine.current_zoom();
        let to_zoom = (from_zoom + delta).clamp(self.tuning.zoom_min, self.tuning.zoom_max);
        surface.engine.ease_to(
            CameraOptions::new().with_zoom(to_zoom),
            TransitionOptions::with_max_duration(options::ZOOM_EASE_MS),
        );
    }

    /// Erlaubt oder verbietet Zoom-Änderungen durch das Framing im
    /// gegebenen automatischen Modus.
    pub fn set_zoom_updates_allowed(&mut self, mode: CameraMode, allowed: bool) {
        if let Some(surface) = self.attached.as_mut() {
            surface.viewport.set_zoom_updates_allowed(mode, allowed);
        }
    }

    /// Setzt das Zoom-Update-Flag für beide automatischen Modi.
    pub fn set_zoom_updates_allowed_all(&mut self, allowed: bool) {
        self.set_zoom_updates_allowed(CameraMode::Following, allowed);
        self.set_zoom_updates_allowed(CameraMode::Overview, allowed);
    }

    /// Gibt zurück, ob das Framing im gegebenen Modus den Zoom
    /// ändern darf. Vor dem `attach` immer `true`.
    pub fn zoom_updates_allowed(&self, mode: CameraMode) -> bool {
        self.attached
            .as_ref()
            .map_or(true, |s| s.viewport.zoom_updates_allowed(mode))
    }

    /// Gibt nach einem Data-Source-Update das eased Frame-Kommando
    /// für den laufenden automatischen Modus aus. Vor der ersten
    /// Position und in `Idle` passiert nichts.
    fn sync_automatic_frame(&mut self) {
        let initialized = self
            .attached
            .as_ref()
            .is_some_and(|s| s.location_initialized);
        if initialized && self.current_mode.is_automatic() {
            self.issue_frame_command(
                self.current_mode,
                TransitionOptions::with_max_duration(options::FRAME_TRANSITION_MAX_MS),
            );
        }
    }

    /// Übersetzt den Rahmungswunsch des Modus in ein Engine-Kommando.
    ///
    /// `Idle` gibt kein Kommando aus (die Kamera bleibt stehen);
    /// ein leerer Rahmungswunsch ebenfalls nicht (degradierter
    /// Zustand ohne Position und Route).
    fn issue_frame_command(&mut self, mode: CameraMode, transition: TransitionOptions) {
        let Some(surface) = self.attached.as_mut() else {
            return;
        };
        let frame = match mode {
            CameraMode::Idle => return,
            CameraMode::Following => surface.viewport.following_frame(),
            CameraMode::Overview => surface.viewport.overview_frame(),
        };
        if frame.is_empty() {
            return;
        }
        let camera = surface.engine.frame_to_fit(frame);
        surface.engine.ease_to(camera, transition);
    }
}
