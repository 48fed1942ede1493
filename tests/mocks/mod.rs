pub mod transport_mock;
