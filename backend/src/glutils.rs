use gl::{types::*, *};
use std::ffi::CStr;

pub fn check_gl_err() -> Result<(), String> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(format!("OpenGL error: {:#x}", err))
}

pub fn log_opengl_info() {
    let version = unsafe { gl::GetString(VERSION) };
    if !version.is_null() {
        let version = unsafe { CStr::from_ptr(version.cast()) };
        log::debug!("GL_VERSION = {}", version.to_string_lossy());
    }

    let mut max_size: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut max_size) };
    log::debug!("MAX_TEXTURE_SIZE = {}", max_size);
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// Allocates an RGBA texture of the given size without initial contents.
/// Nearest filtering keeps square edges and sprites pixel exact.
pub fn create_texture_rgba(width: usize, height: usize) -> Result<u32, String> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
    ];
    create_texture_params(width, height, &params)
}

pub fn create_texture_params(
    width: usize,
    height: usize,
    params: &[(GLenum, GLenum, GLenum)],
) -> Result<u32, String> {
    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            width as i32,
            height as i32,
            0,
            RGBA,
            UNSIGNED_BYTE,
            std::ptr::null(),
        )
    };
    check_gl_err()?;

    Ok(texture)
}

/// Replaces the whole contents of `texture` with tightly packed RGBA rows.
pub fn upload_texture_rgba(
    texture: u32,
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<(), String> {
    if pixels.len() != width * height * 4 {
        return Err(format!(
            "texture upload: expected {} bytes, got {}",
            width * height * 4,
            pixels.len()
        ));
    }
    unsafe {
        gl::BindTexture(TEXTURE_2D, texture);
        gl::PixelStorei(UNPACK_ALIGNMENT, 1);
        gl::TexSubImage2D(
            TEXTURE_2D,
            0,
            0,
            0,
            width as i32,
            height as i32,
            RGBA,
            UNSIGNED_BYTE,
            pixels.as_ptr().cast(),
        )
    };
    check_gl_err()
}
