pub mod scan_interactor;
