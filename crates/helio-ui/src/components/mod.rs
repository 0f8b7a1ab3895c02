pub(crate) mod charts;
pub(crate) mod fitted_canvas;
pub(crate) mod language_menu;
pub(crate) mod page_header;
pub(crate) mod stat_card;
