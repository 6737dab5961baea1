//! VotingSystem contract interface

use alloy_sol_types::sol;

sol! {
    function createBallot(string title, string description, string[] options, uint256 duration) external;

    function vote(uint256 ballotId, uint256 optionIndex) external;

    function getBallot(uint256 ballotId) external view returns (
        string title,
        string description,
        string[] options,
        uint256[] votes,
        uint256 startTime,
        uint256 endTime,
        address creator,
        bool isActive
    );

    function getActiveBallots() external view returns (uint256[] ids);

    function getBallotCount() external view returns (uint256 count);

    function hasVoted(uint256 ballotId, address voter) external view returns (bool voted);
}
