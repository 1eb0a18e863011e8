//! Typed call/event definitions for the external contracts the launch flow
//! talks to: the launch token itself, the pool factory, and the position
//! manager. Only the surface the flows actually use is declared.

pub use launch_token::LaunchToken;
#[rustfmt::skip]
mod launch_token {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug, PartialEq, Eq)]
        contract LaunchToken {
            event FreeMint(address indexed minter, uint256 amount);

            function name() external view returns (string);
            function symbol() external view returns (string);
            function decimals() external view returns (uint8);
            function totalSupply() external view returns (uint256);
            function balanceOf(address account) external view returns (uint256);
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function transfer(address to, uint256 amount) external returns (bool);

            function owner() external view returns (address);
            function freeMint() external;
            function hasMinted(address account) external view returns (bool);
            function paused() external view returns (bool);
            function pause() external;
            function unpause() external;
            function burn(uint256 amount) external;
        }
    );
}

pub use pool_factory::PoolFactory;
#[rustfmt::skip]
mod pool_factory {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug, PartialEq, Eq)]
        contract PoolFactory {
            function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
        }
    );
}

pub use position_manager::PositionManager;
#[rustfmt::skip]
mod position_manager {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug, PartialEq, Eq)]
        contract PositionManager {
            struct MintParams {
                address token0;
                address token1;
                uint24 fee;
                int24 tickLower;
                int24 tickUpper;
                uint256 amount0Desired;
                uint256 amount1Desired;
                uint256 amount0Min;
                uint256 amount1Min;
                address recipient;
                uint256 deadline;
            }

            function createAndInitializePoolIfNecessary(
                address token0,
                address token1,
                uint24 fee,
                uint160 sqrtPriceX96
            ) external payable returns (address pool);

            function mint(MintParams calldata params)
                external
                payable
                returns (uint256 tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
        }
    );
}
