use alloy_sol_types::sol;

sol! {
    interface IPeripheryPaymentsWithFee {
        function unwrapWRBTC(uint256 amountMinimum, address recipient) external payable;

        function refundRBTC() external payable;

        function sweepToken(
            address token,
            uint256 amountMinimum,
            address recipient
        ) external payable;

        function unwrapWRBTCWithFee(
            uint256 amountMinimum,
            address recipient,
            uint256 feeBips,
            address feeRecipient
        ) external payable;

        function sweepTokenWithFee(
            address token,
            uint256 amountMinimum,
            address recipient,
            uint256 feeBips,
            address feeRecipient
        ) external payable;
    }
}
