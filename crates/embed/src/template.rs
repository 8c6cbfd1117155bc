//! For the generated Solidity file.

use crate::bytecode::Bytecode;

/// Where the generated file is written unless told otherwise.
pub const DEFAULT_OUTFILE: &str = "./temp/ImmutableSeaportCreation.sol";

pub const PRAGMA: &str = "pragma solidity ^0.8;";

pub const CONTRACT_NAME: &str = "ImmutableSeaportCreation";

/// Solidity visibility of the generated constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Internal,
}

impl Visibility {
    fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
        }
    }
}

/// Layout of the generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub banner: String,
    pub contract: String,
    pub constant: String,
    pub visibility: Visibility,
}

/// The two shipped layouts. They differ in banner, constant name and visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Readable by any contract or off-chain caller.
    #[default]
    Public,
    /// For use from contracts that inherit the generated one.
    Internal,
}

impl Preset {
    pub fn template(&self) -> Template {
        match self {
            Preset::Public => Template {
                banner: "// Generated file - do not modify directly".to_string(),
                contract: CONTRACT_NAME.to_string(),
                constant: "WALLET_DEPLOY_CODE".to_string(),
                visibility: Visibility::Public,
            },
            Preset::Internal => Template {
                banner: "// Generated file - do not modify directly. Regenerate with txcap_embedder."
                    .to_string(),
                contract: CONTRACT_NAME.to_string(),
                constant: "SEAPORT_CREATION_CODE".to_string(),
                visibility: Visibility::Internal,
            },
        }
    }
}

impl Template {
    /// Source text for a contract with one bytes constant holding the code.
    pub fn render(&self, bytecode: &Bytecode) -> String {
        format!(
            "{banner}\n{PRAGMA}\ncontract {contract} {{\n    bytes {visibility} constant {constant} = hex'{bytecode}';\n}}\n",
            banner = self.banner,
            contract = self.contract,
            visibility = self.visibility.keyword(),
            constant = self.constant,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bytecode::normalize;

    #[test]
    fn test_render_public() {
        let bytecode = normalize("0x1234abcd\n").unwrap();
        let source = Preset::Public.template().render(&bytecode);
        assert_eq!(
            source,
            "// Generated file - do not modify directly\n\
             pragma solidity ^0.8;\n\
             contract ImmutableSeaportCreation {\n    \
             bytes public constant WALLET_DEPLOY_CODE = hex'1234abcd';\n\
             }\n"
        );
        assert_eq!(source.matches("hex'1234abcd'").count(), 1);
    }

    #[test]
    fn test_render_internal() {
        let bytecode = normalize("60806040").unwrap();
        let source = Preset::Internal.template().render(&bytecode);
        assert!(source.starts_with("// Generated file - do not modify directly. Regenerate"));
        assert!(source.contains("    bytes internal constant SEAPORT_CREATION_CODE = hex'60806040';\n"));
        assert!(source.contains("contract ImmutableSeaportCreation {"));
    }
}
