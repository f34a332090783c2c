use wifi_defs::{
    IfaceState, PsParams, SecurityType, TwtFailReason, WifiCode, conn_status_to_result,
    twt_err_code_str,
};

fn main() -> wifi_defs::Result<()> {
    println!("Security types:");
    for security in SecurityType::ALL {
        println!("{:>3}  {:24} personal={}", security.code(), security, security.is_personal());
    }

    // Codes as a driver event would report them
    for raw in [4, 7, 9, 42] {
        println!("state {raw:>2}: {}", IfaceState::label_for_code(raw));
    }

    for raw in [TwtFailReason::PeerNotTwtCapab.code() as i16, -3] {
        println!("twt error {raw}: {}", twt_err_code_str(raw));
    }

    if let Err(e) = conn_status_to_result(2) {
        println!("connect status 2: {e}");
    }

    PsParams::default().with_listen_interval(10).validate()?;
    Ok(())
}
