use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, Button, Orientation};
use toast_presenter::gtk::{install_stylesheet, GlibScheduler, GtkToastSurface};
use toast_presenter::{logging, ToastKind, ToastPresenter, ToastRequest};

const APP_ID: &str = "dev.toast_presenter.Demo";

type GtkPresenter = ToastPresenter<GtkToastSurface, GlibScheduler>;

fn demo_request(kind: ToastKind) -> ToastRequest {
    let (title, message) = match kind {
        ToastKind::Normal => ("Welcome", "Glad to have you here."),
        ToastKind::Success => ("Saved", "Your changes were saved."),
        ToastKind::Error => ("Oops", "Something broke."),
        ToastKind::Info => ("Heads up", "A new version is available."),
    };
    ToastRequest::new(title, message).kind(kind)
}

fn build_window(app: &Application) {
    install_stylesheet(true);

    let (surface, toast_root) = GtkToastSurface::build();
    let presenter: Rc<GtkPresenter> = Rc::new(ToastPresenter::with_user_config(
        Rc::new(RefCell::new(surface)),
        GlibScheduler,
    ));

    let buttons = gtk4::Box::new(Orientation::Horizontal, 8);
    for kind in ToastKind::ALL {
        let button = Button::with_label(kind.as_str());
        let presenter = presenter.clone();
        button.connect_clicked(move |_| {
            let request = demo_request(kind).duration(presenter.config().default_duration());
            presenter.show(request);
        });
        buttons.append(&button);
    }

    let hide = Button::with_label("hide");
    let hide_presenter = presenter.clone();
    hide.connect_clicked(move |_| {
        if let Err(err) = hide_presenter.hide() {
            tracing::warn!(?err, "failed to hide toast");
        }
    });
    buttons.append(&hide);

    let root = gtk4::Box::new(Orientation::Vertical, 16);
    root.set_margin_top(16);
    root.set_margin_start(16);
    root.set_margin_end(16);
    root.append(&buttons);
    root.append(&toast_root);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Toast demo")
        .default_width(640)
        .default_height(360)
        .child(&root)
        .build();
    window.present();
}

fn main() -> anyhow::Result<()> {
    logging::init();
    gtk4::init().context("failed to initialise GTK")?;

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_window);

    let code = app.run();
    tracing::info!(?code, "toast demo exited");
    anyhow::ensure!(
        code == glib::ExitCode::SUCCESS,
        "toast demo exited with {code:?}"
    );
    Ok(())
}
