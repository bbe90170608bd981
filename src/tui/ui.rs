use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;

use crate::core::pages::Page;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutView, AnimalView, ContactView, HelpBar, NavBar, ProjectsView, RepoList, SkillsView,
    UserList, WeatherView,
};
use crate::tui::theme::Theme;

/// Key hints for the help bar, per page.
pub fn hints(route: Route) -> &'static str {
    match route {
        Route::About => "←/→ choose · Enter open · F1-F8 pages · Esc quit",
        Route::Skills => "↑/↓ category · F1-F8 pages · Esc quit",
        Route::Projects => "←/→ filter · ↑/↓ select · Esc quit",
        Route::Contact => "Tab field · Enter send · Esc quit",
        Route::Users | Route::GitHub => "type to search · ↑/↓ select · Ctrl+R reload · Esc quit",
        Route::Animals => "←/→ cat/dog · n next · f save · v gallery · x remove · Esc quit",
        Route::Weather => "Tab focus · Ctrl+F save · Del remove · Ctrl+T test API · Esc quit",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let theme = Theme::for_mode(app.dark_mode);

    frame.render_widget(Block::default().style(theme.text()), frame.area());

    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, main_area, help_area] = layout.areas(frame.area());

    NavBar::new(app.route(), app.dark_mode, theme).render(frame, nav_area);

    match &app.page {
        Page::About(page) => AboutView::new(page, theme).render(frame, main_area),
        Page::Skills(page) => SkillsView::new(page, theme).render(frame, main_area),
        Page::Projects(page) => ProjectsView::new(page, theme).render(frame, main_area),
        Page::Contact(page) => ContactView::new(page, theme).render(frame, main_area),
        Page::Users(page) => {
            UserList::new(&page.list, page.selected, spinner_frame, theme).render(frame, main_area)
        }
        Page::GitHub(page) => RepoList::new(page, spinner_frame, theme).render(frame, main_area),
        Page::Animals(page) => AnimalView::new(page, spinner_frame, theme).render(frame, main_area),
        Page::Weather(page) => {
            WeatherView::new(page, spinner_frame, theme).render(frame, main_area)
        }
    }

    HelpBar::new(&app.status_message, hints(app.route()), theme).render(frame, help_area);
}
