mod sale_to_staking;
