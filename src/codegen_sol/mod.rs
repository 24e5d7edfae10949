pub mod network_params;
