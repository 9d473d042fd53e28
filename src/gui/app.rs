use crate::events::Navigation;
use crate::gui::pie::{self, State};
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub size: i32,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Navigate(Navigation),
    Close,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = State;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Pieship"),
            set_default_size: (model.size, model.size),
            set_resizable: false,
            add_css_class: "pieship-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    match key.name().and_then(|name| Navigation::from_key_name(&name)) {
                        Some(nav) => {
                            sender.input(AppMsg::Navigate(nav));
                            glib::Propagation::Stop
                        }
                        None => glib::Propagation::Proceed,
                    }
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: model.size,
                set_content_height: model.size,
                add_css_class: "pieship-drawing-area",
            }
        }
    }

    fn init(
        state: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        theme::load_css();

        let size = i32::try_from(state.size).unwrap_or(i32::MAX);
        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            size,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        let colors = ThemeColors::default();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if let Err(e) = pie::draw(cr, &mut state_draw.borrow_mut(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Navigate(nav) => {
                self.state.borrow_mut().navigate(nav);
                self.drawing_area.queue_draw();
            }
            AppMsg::Close => self.root.close(),
        }
    }
}
