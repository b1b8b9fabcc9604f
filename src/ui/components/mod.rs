pub mod stories_bar;
