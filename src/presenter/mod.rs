pub mod scan_presenter;
