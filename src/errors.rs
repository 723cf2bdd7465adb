pub const ERR_BELOW_MINIMUM_THRESHOLD: &str = "Tier threshold is below the minimum";
pub const ERR_ZERO_CONTRIBUTION: &str = "Contribution must carry a non-zero value";
pub const ERR_NOT_AUTHORIZED: &str = "Only the administrator can do this";
pub const ERR_NOT_QUALIFIED: &str = "Only approvers can vote";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_DUPLICATE_VOTE: &str = "Already voted on this proposal";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal is already finalized";
pub const ERR_INSUFFICIENT_APPROVALS: &str = "Proposal lacks a strict majority of approvers";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient pool balance";
