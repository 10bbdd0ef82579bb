use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel::{self, SnapTicker, WheelModel};
use crate::sys::haptics::DisplayBell;
use dial::{Point, Score};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct AppModel {
    pub wheel: Rc<RefCell<WheelModel>>,
    pub score: Score,
    pub config: Config,
    pub haptics: DisplayBell,
    pub drawing_area: gtk::DrawingArea,
    pub logo: gtk::Picture,
    /// Set while a snap tick callback is attached to the drawing area.
    pub ticking: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragUpdate(Point),
    DragEnd,
    Score(Score),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn chart_side(&self) -> i32 {
        self.wheel.borrow().size().ceil() as i32
    }

    /// Hands queued score notices to the component in order, pulsing first
    /// where requested.
    fn flush_notices(&self, sender: &ComponentSender<Self>) {
        let mut wheel = self.wheel.borrow_mut();
        wheel
            .selector
            .outbox_mut()
            .deliver(&self.haptics, self.config.wheel.pulse, |score| {
                sender.input(AppMsg::Score(score));
            });
    }

    fn reload(&mut self) {
        let new_config = match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        if let Err(e) = self.wheel.borrow_mut().apply(&new_config) {
            log::error!("Rejected reloaded wheel settings: {}", e);
            return;
        }

        self.haptics = DisplayBell::new(new_config.wheel.haptics);
        if new_config.screen.logo != self.config.screen.logo {
            self.logo.set_filename(new_config.screen.logo.as_deref());
        }
        self.config = new_config;
        let side = self.chart_side();
        self.drawing_area.set_content_width(side);
        self.drawing_area.set_content_height(side);
        self.drawing_area.queue_draw();
        log::info!("Configuration reloaded");
    }

    /// Attaches a tick callback for the snap spring. It detaches itself when
    /// the wheel comes to rest, and a running one picks up a new snap.
    fn start_snap_animation(&self) {
        if self.ticking.get() || !self.wheel.borrow().selector.is_animating() {
            return;
        }
        self.ticking.set(true);

        let wheel = self.wheel.clone();
        let ticking = self.ticking.clone();
        let ticker = RefCell::new(SnapTicker::default());
        self.drawing_area.add_tick_callback(move |_, clock| {
            let flow = ticker
                .borrow_mut()
                .advance(&mut wheel.borrow_mut().selector, clock.frame_time());
            if flow == glib::ControlFlow::Break {
                ticking.set(false);
            }
            flow
        });
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Config,
        WheelModel,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Score Wheel"),
            set_default_width: 480,
            set_default_height: 860,
            add_css_class: "scorewheel-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 16,
                set_margin_top: 16,
                set_margin_bottom: 16,
                set_halign: gtk::Align::Center,
                add_css_class: "scorewheel-root",

                gtk::Label {
                    add_css_class: "scorewheel-header",
                    #[watch]
                    set_label: &model.config.screen.title,
                },

                #[name = "logo"]
                gtk::Picture {
                    set_height_request: 80,
                    set_filename: model.config.screen.logo.as_deref(),
                    #[watch]
                    set_visible: model.config.screen.logo.is_some(),
                },

                gtk::Label {
                    add_css_class: "scorewheel-score",
                    set_vexpand: true,
                    #[watch]
                    set_markup: &theme::score_markup(model.score),
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: model.chart_side(),
                    set_content_height: model.chart_side(),
                    set_halign: gtk::Align::Center,

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::DragBegin(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::DragUpdate(Point::new(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragEnd);
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, wheel, rx) = init;

        theme::load_css();

        let model = AppModel {
            wheel: Rc::new(RefCell::new(wheel)),
            score: Score::default(),
            haptics: DisplayBell::new(config.wheel.haptics),
            config,
            drawing_area: gtk::DrawingArea::default(),
            logo: gtk::Picture::default(),
            ticking: Rc::new(Cell::new(false)),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.logo = widgets.logo.clone();

        let wheel_draw = model.wheel.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = wheel::draw(cr, &wheel_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // redraw whenever the rotation moves
        let area = widgets.drawing_area.downgrade();
        model.wheel.borrow().selector.angle().observe(move |_| {
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        model.flush_notices(&sender);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(point) => {
                if let Err(e) = self.wheel.borrow_mut().selector.on_start(point) {
                    log::debug!("Ignoring drag start: {}", e);
                }
            }
            AppMsg::DragUpdate(point) => {
                if let Err(e) = self.wheel.borrow_mut().selector.on_update(point) {
                    log::debug!("Ignoring drag update: {}", e);
                }
                self.flush_notices(&sender);
            }
            AppMsg::DragEnd => {
                if let Err(e) = self.wheel.borrow_mut().selector.on_end() {
                    log::debug!("Ignoring release: {}", e);
                }
                self.flush_notices(&sender);
                self.start_snap_animation();
            }
            AppMsg::Score(score) => {
                self.score = score;
            }
            AppMsg::ConfigReload => self.reload(),
        }
    }
}
