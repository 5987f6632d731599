use futures::executor::block_on;
use galeria_core::{DirectoryState, Local};
use galeria_web::components::ui::gallery::{
    ErrorPanel, ErrorPanelProps, GalleryMap, GalleryView, GalleryViewProps, LoadingPanel,
};
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn local(id: &str, nombre: &str, rubro: &str, ubicacion: &str, ofertas: bool) -> Local {
    Local {
        id: id.to_string(),
        nombre: nombre.to_string(),
        rubro: rubro.to_string(),
        ubicacion: ubicacion.to_string(),
        horarios: String::from("Lun a Sáb 10:00–20:00"),
        imagen: format!("/static/assets/img/locales/{id}.jpg"),
        url: format!("https://{id}.example.com"),
        accesibilidad: vec![String::from("Rampa de acceso")],
        ofertas,
        x: 40.0,
        y: 60.0,
    }
}

fn sample() -> Rc<Vec<Local>> {
    Rc::new(vec![
        local("seven-barber", "Seven Barber", "Barbería", "Pasillo A — Local 3", true),
        local("game-store", "Game Store", "Videojuegos", "Pasillo B — Local 7", false),
        local("focuz", "Focuz", "Indumentaria", "Pasillo A — Local 2", false),
    ])
}

fn view_props(state: DirectoryState) -> GalleryViewProps {
    GalleryViewProps {
        locales: sample(),
        state,
        on_query: Callback::noop(),
        on_rubro: Callback::noop(),
        on_reset: Callback::noop(),
        on_select: Callback::noop(),
        on_hover: Callback::noop(),
        on_unhover: Callback::noop(),
    }
}

fn render_view(state: DirectoryState) -> String {
    block_on(LocalServerRenderer::<GalleryView>::with_props(view_props(state)).render())
}

#[test]
fn gallery_map_starts_in_the_loading_state() {
    let html = block_on(LocalServerRenderer::<GalleryMap>::new().render());
    assert!(html.contains("Cargando los locales"));
}

#[test]
fn loading_panel_is_a_status_region() {
    let html = block_on(LocalServerRenderer::<LoadingPanel>::new().render());
    assert!(html.contains("role=\"status\""));
}

#[test]
fn ready_view_renders_pins_cards_and_controls() {
    let html = render_view(DirectoryState::new());
    assert_eq!(html.matches("class=\"map-pin\"").count(), 3);
    assert!(html.contains("local-card-seven-barber"));
    assert!(html.contains("search-results-announcer"));
    assert!(html.contains("Mapa interactivo de la galería"));
    assert!(html.contains("Pasillo A"));
    assert!(html.contains("¡Ofertas disponibles!"));
    assert!(html.contains("Todos"));
    assert!(html.contains("data-filter=\"videojuegos\""));
    assert!(html.contains("Rampa de acceso"));
}

#[test]
fn filtering_hides_pins_instead_of_removing_them() {
    let mut state = DirectoryState::new();
    state.set_query("game");
    let html = render_view(state);

    // All three pins stay in the SVG, two of them hidden.
    assert_eq!(html.matches("class=\"map-pin\"").count(), 3);
    assert_eq!(html.matches("display:none").count(), 2);
    // The card list only shows the match.
    assert!(html.contains("local-card-game-store"));
    assert!(!html.contains("local-card-focuz"));
    assert!(!html.contains("local-card-seven-barber"));
}

#[test]
fn selection_paints_exactly_one_pin_and_card() {
    let mut state = DirectoryState::new();
    state.select("focuz");
    let html = render_view(state);
    assert_eq!(html.matches("#dc2626").count(), 1);
    assert_eq!(html.matches("r=\"12\"").count(), 1);
    assert_eq!(html.matches("selected").count(), 1);
}

#[test]
fn hover_highlights_pin_and_card_together() {
    let mut state = DirectoryState::new();
    state.hover("game-store");
    let html = render_view(state);
    assert_eq!(html.matches("#f59e0b").count(), 2); // hovered pin + the entrance marker
    assert_eq!(html.matches("r=\"10\"").count(), 1);
    assert_eq!(html.matches("highlighted").count(), 1);
}

#[test]
fn hover_does_not_displace_an_existing_selection() {
    let mut state = DirectoryState::new();
    state.select("focuz");
    state.hover("focuz");
    let html = render_view(state);
    // Selection wins: the pin stays red even while hovered.
    assert_eq!(html.matches("#dc2626").count(), 1);
    assert_eq!(html.matches("r=\"10\"").count(), 0);
}

#[test]
fn empty_result_set_offers_a_reset() {
    let mut state = DirectoryState::new();
    state.set_query("zzz");
    let html = render_view(state);
    assert!(html.contains("No se encontraron locales que coincidan con tu búsqueda."));
    assert!(html.contains("Ver todos los locales"));
    assert!(!html.contains("local-card-"));
}

#[test]
fn error_panel_offers_a_manual_reload() {
    let props = ErrorPanelProps {
        message: String::from("HTTP status 404"),
    };
    let html = block_on(LocalServerRenderer::<ErrorPanel>::with_props(props).render());
    assert!(html.contains("Error al cargar los datos de los locales"));
    assert!(html.contains("HTTP status 404"));
    assert!(html.contains("Intentar de nuevo"));
    assert!(html.contains("role=\"alert\""));
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn announcer_writes_into_the_live_region() {
        let document = galeria_web::dom::document();
        let div = document.create_element("div").expect("create announcer");
        div.set_id(galeria_web::a11y::ANNOUNCER_ID);
        document
            .body()
            .expect("body")
            .append_child(&div)
            .expect("attach announcer");

        galeria_web::a11y::announce("Se encontró 1 local");
        assert_eq!(div.text_content().as_deref(), Some("Se encontró 1 local"));
    }
}
