mod actor;
mod subscription;
