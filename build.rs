use std::env;

fn use_vendored_protoc() -> Result<(), Box<dyn std::error::Error>> {
    // Use vendored protoc binary (no system protoc required)
    unsafe {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    Ok(())
}

fn compile_service_protos() -> Result<(), Box<dyn std::error::Error>> {
    let proto_dir = std::path::Path::new("proto");
    let service_proto = proto_dir.join("service.proto");

    println!("cargo:rerun-if-changed={}", service_proto.display());

    use_vendored_protoc()?;

    // Client and server stubs both live in the library: the CLI runs either side
    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(&[service_proto], &[proto_dir.to_path_buf()])?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    compile_service_protos()?;

    Ok(())
}
