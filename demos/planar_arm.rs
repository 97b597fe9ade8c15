use dh_kinematics::*;

use std::f64::consts::PI;

fn main() {
    let links = [
        DhParams::new(0.0, 0.0, 0.5, 0.0), // shoulder, l1 = 0.5
        DhParams::new(0.0, 0.0, 0.3, 0.0), // elbow, l2 = 0.3
    ];
    let chain_result = SerialChain::new(&links);

    match chain_result {
        Ok(chain) => {
            println!("Two-link planar arm: {}", chain);
            for (i, link) in chain.links().iter().enumerate() {
                println!("  Link {}: {}", i + 1, link);
            }

            let q1 = PI / 6.0; // Fixed shoulder angle
            let num_steps = 8;
            println!("\nSweeping the elbow joint with q1 = {:.3} rad...", q1);

            for i in 0..=num_steps {
                let q2 = i as f64 * PI / num_steps as f64;
                match chain.tool_position(&[q1, q2]) {
                    Ok([x, y, z]) => {
                        println!(
                            "Step {:>2}: q2 = {:.3} rad -> tool at (x: {:.3}, y: {:.3}, z: {:.3})",
                            i, q2, x, y, z
                        );
                    }
                    Err(e) => {
                        eprintln!("Error during sweep step {}: {:?}", i, e);
                        break; // Stop loop on error
                    }
                }
            }

            let angles = [q1, PI / 3.0];
            match chain.forward_kinematics(&angles) {
                Ok(pose) => {
                    println!(
                        "\nFinal tool pose at q = ({:.3}, {:.3}) rad:\n{}",
                        angles[0], angles[1], pose
                    );
                }
                Err(e) => eprintln!("Failed to compute final pose: {:?}", e),
            }
        }
        Err(e) => {
            eprintln!("Failed to build chain: {:?}", e);
            eprintln!("Please provide at least one link.");
        }
    }
}
