use crate::codegen::CodeGenerator;
use crate::{Chain, Placeholder, Placeholders, Result};
use std::io::Write;

/// Renders `NetworkParams.sol`, the commented reference for the bridge mediators'
/// `initialize()` arguments.
pub struct NetworkParamsSol;

/// Path of the generating script as seen from the output directory.
const GENERATOR: &str = "../scripts/generate_network_params.rs";

const LAYER1_CHAIN: &str = "layer1 chain";
const SIDE_CHAIN: &str = "side-chain";
const X_AMB_ADDRESS: &str = "xAmbAddress";
const AMB_ERC20_EXT_ADDRESS: &str = "ambErc20ExtAddress";
const X_KING_TOKEN_ADDRESS: &str = "xKingTokenAddress";
const AMB_ADDRESS: &str = "ambAddress";
const X_AMB_ERC20_EXT_ADDRESS: &str = "xAmbErc20ExtAddress";
const KING_TOKEN_ADDRESS: &str = "kingTokenAddress";

impl CodeGenerator for NetworkParamsSol {
	fn name(&self) -> &str {
		"network_params_sol"
	}

	fn output_dir(&self) -> &str {
		"../contracts"
	}

	fn output_file(&self) -> &str {
		"NetworkParams.sol"
	}

	fn placeholders(&self) -> Placeholders {
		use Chain::*;

		[
			("layer1_chain", LAYER1_CHAIN, Some(Layer1), "name of the home chain"),
			("side_chain", SIDE_CHAIN, Some(SideChain), "name of the foreign chain"),
			("x_amb_address", X_AMB_ADDRESS, Some(SideChain), "AMB bridge contract"),
			("amb_erc20_ext_address", AMB_ERC20_EXT_ADDRESS, Some(Layer1), "mediator contract"),
			("x_king_token_address", X_KING_TOKEN_ADDRESS, Some(SideChain), "ERC20/ERC677 token contract"),
			("amb_address", AMB_ADDRESS, Some(Layer1), "AMB bridge contract"),
			("x_amb_erc20_ext_address", X_AMB_ERC20_EXT_ADDRESS, Some(SideChain), "mediator contract"),
			("king_token_address", KING_TOKEN_ADDRESS, Some(Layer1), "ERC20/ERC677 token contract"),
		]
		.into_iter()
		.map(|(key, label, chain, description)| (key.to_string(), Placeholder::new(label, chain, description)))
		.collect()
	}

	fn render(&self, w: &mut impl Write) -> Result<()> {
		write!(
			w,
			include_str!("templates/NetworkParams.sol"),
			generator = GENERATOR,
			layer1_chain = LAYER1_CHAIN,
			side_chain = SIDE_CHAIN,
			x_amb_address = X_AMB_ADDRESS,
			amb_erc20_ext_address = AMB_ERC20_EXT_ADDRESS,
			x_king_token_address = X_KING_TOKEN_ADDRESS,
			amb_address = AMB_ADDRESS,
			x_amb_erc20_ext_address = X_AMB_ERC20_EXT_ADDRESS,
			king_token_address = KING_TOKEN_ADDRESS,
		)?;

		Ok(())
	}
}
