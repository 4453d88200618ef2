//! Built-in learning paths seeding the topic picker.
//!
//! Two static tables, one per audience; each topic carries the prompt that is
//! sent (wrapped in topic-selection markers) when the user picks it.

use serde::{Deserialize, Serialize};

/// Audience the tutor adapts to; selects the learning path and is named in
/// the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Developer,
    NonTechnical,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Developer, UserRole::NonTechnical];

    pub fn id(self) -> &'static str {
        match self {
            UserRole::Developer => "developer",
            UserRole::NonTechnical => "non-technical",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::Developer => "Developer",
            UserRole::NonTechnical => "Non-technical",
        }
    }

    pub fn from_id(id: &str) -> Option<UserRole> {
        UserRole::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn learning_path(self) -> &'static [LearningSection] {
        match self {
            UserRole::Developer => DEVELOPER_LEARNING_PATH,
            UserRole::NonTechnical => NON_TECHNICAL_LEARNING_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningTopic {
    pub title: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningSection {
    pub title: &'static str,
    pub topics: &'static [LearningTopic],
}

pub const DEVELOPER_LEARNING_PATH: &[LearningSection] = &[
    LearningSection {
        title: "1. FHEVM Foundations",
        topics: &[
            LearningTopic {
                title: "What is FHEVM?",
                prompt: "Explain what FHEVM is from a technical perspective. What problem does it solve for developers?",
            },
            LearningTopic {
                title: "Key Concepts",
                prompt: "Describe the core concepts of FHEVM: encrypted data types (e.g., euint32), on-chain confidential computation, and the role of fhevmjs.",
            },
            LearningTopic {
                title: "Environment Setup",
                prompt: "Provide a step-by-step guide on how to set up a local development environment using the fhevm-hardhat-template.",
            },
        ],
    },
    LearningSection {
        title: "2. Your First dApp",
        topics: &[
            LearningTopic {
                title: "Writing the Contract",
                prompt: "Generate a simple 'Encrypted Counter' smart contract in Solidity using FHEVM. Explain how to use `euint32` and basic FHEVM operations.",
            },
            LearningTopic {
                title: "Client-Side Interaction",
                prompt: "Show me the JavaScript code using ethers.js and fhevmjs to interact with the 'Encrypted Counter' contract. Cover key generation, encryption, and decryption.",
            },
            LearningTopic {
                title: "Testing Contracts",
                prompt: "Explain how to write a Hardhat test for the 'Encrypted Counter' contract, including how to handle encrypted values in tests.",
            },
        ],
    },
    LearningSection {
        title: "3. Advanced Concepts",
        topics: &[
            LearningTopic {
                title: "Viewing Encrypted State",
                prompt: "Explain the purpose and usage of `FHE.reencrypt` with a code example. How does it allow users to view their private data?",
            },
            LearningTopic {
                title: "Conditional Logic",
                prompt: "How do you perform conditional logic with encrypted values? Explain `FHE.cmux` (conditional multiplexer) with a practical example, like in a voting contract.",
            },
            LearningTopic {
                title: "Gas Optimization",
                prompt: "Discuss gas considerations when working with FHEVM. What are some best practices for writing gas-efficient confidential smart contracts?",
            },
        ],
    },
];

pub const NON_TECHNICAL_LEARNING_PATH: &[LearningSection] = &[
    LearningSection {
        title: "1. The Big Picture",
        topics: &[
            LearningTopic {
                title: "What is FHE?",
                prompt: "Explain Fully Homomorphic Encryption (FHE) in simple terms using an analogy, like a locked box you can work with.",
            },
            LearningTopic {
                title: "Why Privacy Matters",
                prompt: "Why is privacy important on the blockchain? What are the risks of public blockchains like Ethereum?",
            },
            LearningTopic {
                title: "Introducing Zama",
                prompt: "What is Zama, and what is its mission? How does it plan to solve the privacy problem in blockchain and AI?",
            },
        ],
    },
    LearningSection {
        title: "2. How FHEVM Works",
        topics: &[
            LearningTopic {
                title: "Confidential Smart Contracts",
                prompt: "What is a confidential smart contract? Use the example of a secret ballot or a private auction to explain the concept.",
            },
            LearningTopic {
                title: "The User Experience",
                prompt: "Walk me through how a user interacts with an FHEVM dApp. Explain the roles of their browser, their keys, and the blockchain in a simple, step-by-step way. Use the Data Flow visual.",
            },
            LearningTopic {
                title: "Real-World Use Cases",
                prompt: "What are some exciting, real-world applications that are possible with FHEVM? Give examples in gaming, DeFi, and identity management.",
            },
        ],
    },
    LearningSection {
        title: "3. The Zama Ecosystem",
        topics: &[
            LearningTopic {
                title: "FHE in AI",
                prompt: "Beyond blockchain, how is Zama using FHE to create private AI applications? Explain the concept of Concrete ML.",
            },
            LearningTopic {
                title: "Community & Bounties",
                prompt: "How can someone who is not a developer get involved in the Zama community? Talk about the bounty program and community forums.",
            },
            LearningTopic {
                title: "The Future of FHE",
                prompt: "What is the long-term vision for Zama and FHE technology? What new possibilities might be unlocked in the future?",
            },
        ],
    },
];
