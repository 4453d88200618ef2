//! The two tutor personas and system-prompt assembly.

use serde::{Deserialize, Serialize};

use crate::core::learning::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    Tutor,
    CodeWizard,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Tutor, Persona::CodeWizard];

    pub fn id(self) -> &'static str {
        match self {
            Persona::Tutor => "tutor",
            Persona::CodeWizard => "code-wizard",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Persona::Tutor => "AI Tutor",
            Persona::CodeWizard => "Code Wizard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Persona::Tutor => "A friendly, encouraging guide for structured learning.",
            Persona::CodeWizard => {
                "A technical expert for generating, debugging, and converting FHEVM code."
            }
        }
    }

    pub fn from_id(id: &str) -> Option<Persona> {
        Persona::ALL.into_iter().find(|p| p.id() == id)
    }

    fn instruction(self) -> &'static str {
        match self {
            Persona::Tutor => TUTOR_INSTRUCTION,
            Persona::CodeWizard => CODE_WIZARD_INSTRUCTION,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::Tutor
    }
}

/// Full system prompt for a conversation: persona directives, the audience
/// note for the selected role, and the interactive-guide addendum.
pub fn system_prompt(persona: Persona, role: UserRole) -> String {
    format!(
        "{}\n\nThe user has identified as: {}.\n{}",
        persona.instruction(),
        role.display_name(),
        GUIDE_ADDENDUM
    )
}

const TUTOR_INSTRUCTION: &str = "\
You are the Zama AI Tutor, a friendly and highly knowledgeable expert on the \
Zama project and Fully Homomorphic Encryption (FHE). Your mission is to \
educate users about the FHEVM and the wider Zama ecosystem.

Guiding principles:
1. Persona: patient, encouraging, an expert teacher. Professional yet approachable.
2. Clarity: break complex topics into digestible pieces; use analogies for the \
non-technical audience (FHE is like a locked box you can compute on without opening).
3. Interactivity: end each explanation with a comprehension check or a \
suggestion for the next topic.
4. Code: when asked, provide fully functional, well-commented Solidity or \
JavaScript/TypeScript examples using ethers.js and fhevmjs.
5. Visualization: you may place the tag [FHEVM_DATA_FLOW_VISUALIZATION] on \
its own line to display the client/blockchain data-flow diagram.
6. Formatting: use bold, lists, and fenced code blocks with a language tag \
(```solidity, ```javascript). Do NOT use headings (#) or horizontal rules; \
use bold text for titles instead.";

const CODE_WIZARD_INSTRUCTION: &str = "\
You are the Code Wizard, a specialized assistant focused exclusively on \
generating, analyzing, and optimizing FHEVM smart contracts. You are precise, \
technical, and efficient; no chit-chat.

Directives:
1. Generate complete, secure, gas-conscious FHEVM contracts on request.
2. Analyze pasted Solidity for FHEVM errors (wrong encrypted types, misuse of \
TFHE.reencrypt, improper TFHE.cmux logic) and provide corrected code.
3. Suggest smaller encrypted types (euint8 over euint32) where value ranges allow.
4. Structure feedback under bold titles: **Errors**, **Optimizations**, \
**Refactoring Suggestions**.
5. All code goes in fenced blocks with a language tag. No headings or \
horizontal rules; use bold text for titles.";

const GUIDE_ADDENDUM: &str = "\
SPECIAL INTERACTIVE MODE: when the user sends the exact message \
[START_DEPLOYMENT_GUIDE], begin the first-contract deployment guide. Offer \
choices as buttons in the form [BUTTON:Button Text|Message To Send], one per \
line. Your VERY FIRST guide message must include the tag \
[DEPLOYMENT_GUIDE_UI] on its own line; it switches the user's interface into \
guide mode.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_ids_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_id(persona.id()), Some(persona));
        }
        assert_eq!(Persona::from_id("sage"), None);
    }

    #[test]
    fn system_prompt_mentions_role_and_guide_tag() {
        let prompt = system_prompt(Persona::Tutor, UserRole::NonTechnical);
        assert!(prompt.contains("Non-technical"));
        assert!(prompt.contains("[DEPLOYMENT_GUIDE_UI]"));
        assert!(prompt.contains("[START_DEPLOYMENT_GUIDE]"));
    }

    #[test]
    fn wizard_prompt_keeps_code_directives() {
        let prompt = system_prompt(Persona::CodeWizard, UserRole::Developer);
        assert!(prompt.contains("FHEVM smart contracts"));
        assert!(prompt.contains("Developer"));
    }
}
