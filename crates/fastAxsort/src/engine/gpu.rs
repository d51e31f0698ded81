//! GPU-accelerated execution provider for sorting.
//!
//! ## Purpose
//!
//! This module provides the wgpu compute provider. It sorts
//! order-preserving 32-bit key encodings (paired with their original
//! indices) with a bitonic network, so one shader serves `sort` and
//! `argsort` for every dtype that has an encoding.
//!
//! ## Design notes
//!
//! * **Pair network**: Keys and indices move together through the
//!   network; equal keys order by index, which makes the result match
//!   the stable host kernels.
//! * **Padding**: Inputs are padded to the next power of two with
//!   maximal (key, index) pairs, which sink to the tail and are dropped
//!   on download.
//! * **Buffer recycling**: Device buffers grow on demand and are reused
//!   across calls; bind groups are rebuilt only when a buffer changes.
//! * **Readback**: Results are copied to a staging buffer, mapped via a
//!   oneshot channel, and decoded on the host before the call returns.
//!
//! ## Invariants
//!
//! * Capability checks (`supports`) are consulted before dispatch; the
//!   provider is never handed a request outside them.
//! * Sorted output agrees with the host kernels, except that signed
//!   zeros order `-0.0` before `+0.0` and NaN payloads collapse to the
//!   canonical quiet NaN.
//!
//! ## Non-goals
//!
//! * This module does not implement lexsort (the selection layer routes
//!   it to the CPU path).
//! * This module does not validate geometry.

use bytemuck::{Pod, Zeroable};

// Export dependencies from axsort
use axsort::internals::engine::provider::{Operation, SortProvider};
use axsort::internals::primitives::dtype::{DType, SortElement};
use axsort::internals::primitives::errors::SortError;
use axsort::internals::primitives::shape::{KeyMatrix, Shape};

use wgpu::{
    BindGroup, BindGroupDescriptor, BindGroupEntry, BindGroupLayoutDescriptor,
    BindGroupLayoutEntry, BindingResource, BindingType, Buffer, BufferBinding, BufferBindingType,
    BufferDescriptor, BufferSize, BufferUsages, CommandEncoderDescriptor, ComputePassDescriptor,
    ComputePipeline, ComputePipelineDescriptor, Device, Instance, InstanceDescriptor, MapMode,
    PipelineLayoutDescriptor, PollType, Queue, ShaderModuleDescriptor, ShaderSource, ShaderStages,
};

// Largest segment the device path accepts: padded dispatches must stay
// under the per-dimension workgroup limit at workgroup size 256.
const MAX_DEVICE_LEN: usize = 1 << 23;

const WORKGROUP_SIZE: u32 = 256;

// -----------------------------------------------------------------------------
// Shader Source (WGSL)
// -----------------------------------------------------------------------------
const SHADER_SOURCE: &str = r#"
struct Pass {
    j: u32,
    k: u32,
    n: u32,
    _pad: u32,
}

@group(0) @binding(0) var<uniform> pass_cfg: Pass;
@group(0) @binding(1) var<storage, read_write> keys: array<u32>;
@group(0) @binding(2) var<storage, read_write> perm: array<u32>;

// One bitonic compare-exchange pass over (key, index) pairs. The index
// participates in the comparison, so equal keys order by original
// position and the network output matches a stable sort.
@compute @workgroup_size(256)
fn bitonic_step(@builtin(global_invocation_id) gid: vec3<u32>) {
    let i = gid.x;
    if (i >= pass_cfg.n) {
        return;
    }
    let partner = i ^ pass_cfg.j;
    if (partner <= i) {
        return;
    }

    let ascending = (i & pass_cfg.k) == 0u;

    let a = keys[i];
    let b = keys[partner];
    let pa = perm[i];
    let pb = perm[partner];

    let gt = (a > b) || (a == b && pa > pb);
    let lt = (a < b) || (a == b && pa < pb);

    if (select(lt, gt, ascending)) {
        keys[i] = b;
        keys[partner] = a;
        perm[i] = pb;
        perm[partner] = pa;
    }
}
"#;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct PassParams {
    j: u32,
    k: u32,
    n: u32,
    _pad: u32,
}

// -----------------------------------------------------------------------------
// Platform compatibility
// -----------------------------------------------------------------------------

/// Instance configuration, isolated so platform workarounds stay out of
/// the provider logic.
fn instance_descriptor() -> InstanceDescriptor {
    #[cfg(target_os = "windows")]
    {
        // Some Windows Vulkan driver stacks fail staging-buffer mapping;
        // DX12 is the reliable path there.
        InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        InstanceDescriptor::default()
    }
}

// -----------------------------------------------------------------------------
// GpuExecutor
// -----------------------------------------------------------------------------

struct GpuExecutor {
    device: Device,
    queue: Queue,

    pipeline: ComputePipeline,

    // Device buffers, grown on demand
    key_buffer: Option<Buffer>,
    perm_buffer: Option<Buffer>,
    params_buffer: Option<Buffer>,
    staging_buffer: Option<Buffer>,

    bind_group: Option<BindGroup>,

    // Byte stride between per-pass uniform entries
    params_stride: u64,
}

impl GpuExecutor {
    async fn new() -> Result<Self, String> {
        let instance = Instance::new(&instance_descriptor());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await;
        let adapter = adapter.map_err(|_| "No GPU adapter found")?;

        let (device, queue): (Device, Queue) = adapter
            .request_device(&Default::default())
            .await
            .map_err(|e| format!("Device error: {:?}", e))?;

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Bitonic Sort Shader"),
            source: ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Bitonic BG"),
            entries: &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::COMPUTE,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: BufferSize::new(
                            std::mem::size_of::<PassParams>() as u64
                        ),
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::COMPUTE,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 2,
                    visibility: ShaderStages::COMPUTE,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Bitonic Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            ..Default::default()
        });

        let pipeline = device.create_compute_pipeline(&ComputePipelineDescriptor {
            label: Some("bitonic_step"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("bitonic_step"),
            compilation_options: Default::default(),
            cache: None,
        });

        let params_stride =
            (device.limits().min_uniform_buffer_offset_alignment as u64).max(16);

        Ok(Self {
            device,
            queue,
            pipeline,
            key_buffer: None,
            perm_buffer: None,
            params_buffer: None,
            staging_buffer: None,
            bind_group: None,
            params_stride,
        })
    }

    fn ensure_buffer_capacity(
        device: &Device,
        label: &str,
        buffer_opt: &mut Option<Buffer>,
        size_required: u64,
        usage: BufferUsages,
    ) -> bool {
        let mut created_new = false;
        if let Some(buffer) = buffer_opt.as_ref() {
            if buffer.size() < size_required {
                *buffer_opt = None;
            }
        }

        if buffer_opt.is_none() {
            *buffer_opt = Some(device.create_buffer(&BufferDescriptor {
                label: Some(label),
                size: size_required,
                usage,
                mapped_at_creation: false,
            }));
            created_new = true;
        }
        created_new
    }

    /// Upload padded pairs, run the full network, and leave sorted pairs
    /// in the device buffers.
    fn run_network(&mut self, keys: &[u32]) -> Result<usize, SortError> {
        let n = keys.len();
        let padded = n.next_power_of_two().max(2);
        let padded_bytes = (padded * 4) as u64;

        // Enumerate all compare-exchange passes up front.
        let mut passes: Vec<PassParams> = Vec::new();
        let mut k = 2usize;
        while k <= padded {
            let mut j = k >> 1;
            while j > 0 {
                passes.push(PassParams {
                    j: j as u32,
                    k: k as u32,
                    n: padded as u32,
                    _pad: 0,
                });
                j >>= 1;
            }
            k <<= 1;
        }
        let params_bytes = self.params_stride * passes.len() as u64;

        let mut bg_needs_update = false;
        if Self::ensure_buffer_capacity(
            &self.device,
            "Keys",
            &mut self.key_buffer,
            padded_bytes,
            BufferUsages::STORAGE | BufferUsages::COPY_DST | BufferUsages::COPY_SRC,
        ) {
            bg_needs_update = true;
        }
        if Self::ensure_buffer_capacity(
            &self.device,
            "Perm",
            &mut self.perm_buffer,
            padded_bytes,
            BufferUsages::STORAGE | BufferUsages::COPY_DST | BufferUsages::COPY_SRC,
        ) {
            bg_needs_update = true;
        }
        if Self::ensure_buffer_capacity(
            &self.device,
            "PassParams",
            &mut self.params_buffer,
            params_bytes,
            BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        ) {
            bg_needs_update = true;
        }
        Self::ensure_buffer_capacity(
            &self.device,
            "Staging",
            &mut self.staging_buffer,
            padded_bytes,
            BufferUsages::MAP_READ | BufferUsages::COPY_DST,
        );

        if bg_needs_update || self.bind_group.is_none() {
            self.bind_group = Some(self.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Bitonic BG"),
                layout: &self.pipeline.get_bind_group_layout(0),
                entries: &[
                    BindGroupEntry {
                        binding: 0,
                        resource: BindingResource::Buffer(BufferBinding {
                            buffer: self.params_buffer.as_ref().unwrap(),
                            offset: 0,
                            size: BufferSize::new(std::mem::size_of::<PassParams>() as u64),
                        }),
                    },
                    BindGroupEntry {
                        binding: 1,
                        resource: self.key_buffer.as_ref().unwrap().as_entire_binding(),
                    },
                    BindGroupEntry {
                        binding: 2,
                        resource: self.perm_buffer.as_ref().unwrap().as_entire_binding(),
                    },
                ],
            }));
        }

        // Padded tail: maximal pairs sink past every real element,
        // including real NaN keys (their indices are smaller).
        let mut padded_keys = Vec::with_capacity(padded);
        padded_keys.extend_from_slice(keys);
        padded_keys.resize(padded, u32::MAX);
        let mut perm: Vec<u32> = (0..n as u32).collect();
        perm.resize(padded, u32::MAX);

        self.queue.write_buffer(
            self.key_buffer.as_ref().unwrap(),
            0,
            bytemuck::cast_slice(&padded_keys),
        );
        self.queue.write_buffer(
            self.perm_buffer.as_ref().unwrap(),
            0,
            bytemuck::cast_slice(&perm),
        );

        let mut params_data = vec![0u8; params_bytes as usize];
        for (i, p) in passes.iter().enumerate() {
            let at = i * self.params_stride as usize;
            params_data[at..at + std::mem::size_of::<PassParams>()]
                .copy_from_slice(bytemuck::bytes_of(p));
        }
        self.queue
            .write_buffer(self.params_buffer.as_ref().unwrap(), 0, &params_data);

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Bitonic Sort"),
            });
        {
            let mut pass = encoder.begin_compute_pass(&ComputePassDescriptor::default());
            pass.set_pipeline(&self.pipeline);
            let groups = (padded as u32).div_ceil(WORKGROUP_SIZE);
            for i in 0..passes.len() {
                let offset = (i as u64 * self.params_stride) as u32;
                pass.set_bind_group(0, self.bind_group.as_ref().unwrap(), &[offset]);
                pass.dispatch_workgroups(groups, 1, 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));

        Ok(n)
    }

    async fn download_buffer(&self, buf: &Buffer, n: usize) -> Option<Vec<u32>> {
        let size = (n * 4) as u64;
        let mut encoder = self.device.create_command_encoder(&Default::default());
        encoder.copy_buffer_to_buffer(buf, 0, self.staging_buffer.as_ref().unwrap(), 0, size);
        self.queue.submit(Some(encoder.finish()));

        let slice = self.staging_buffer.as_ref().unwrap().slice(..size);
        let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
        slice.map_async(MapMode::Read, move |v| tx.send(v).unwrap());
        let _ = self.device.poll(PollType::Wait {
            submission_index: None,
            timeout: None,
        });

        if let Some(Ok(())) = rx.receive().await {
            let data = slice.get_mapped_range();
            let ret = bytemuck::cast_slice(&data).to_vec();
            drop(data);
            self.staging_buffer.as_ref().unwrap().unmap();
            Some(ret)
        } else {
            None
        }
    }

    fn sorted_keys(&mut self, keys: &[u32]) -> Result<Vec<u32>, SortError> {
        let n = self.run_network(keys)?;
        let buf = self.key_buffer.as_ref().unwrap();
        pollster::block_on(self.download_buffer(buf, n))
            .ok_or_else(|| SortError::DeviceError("staging buffer mapping failed".to_string()))
    }

    fn sorted_permutation(&mut self, keys: &[u32]) -> Result<Vec<u32>, SortError> {
        let n = self.run_network(keys)?;
        let buf = self.perm_buffer.as_ref().unwrap();
        pollster::block_on(self.download_buffer(buf, n))
            .ok_or_else(|| SortError::DeviceError("staging buffer mapping failed".to_string()))
    }
}

// -----------------------------------------------------------------------------
// GpuProvider
// -----------------------------------------------------------------------------

/// wgpu compute provider for `sort` and `argsort`.
pub struct GpuProvider {
    exec: GpuExecutor,
}

impl std::fmt::Debug for GpuProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuProvider").finish_non_exhaustive()
    }
}

impl GpuProvider {
    /// Acquire an adapter and build the compute pipeline.
    pub fn new() -> Result<Self, SortError> {
        let exec = pollster::block_on(GpuExecutor::new()).map_err(SortError::DeviceError)?;
        Ok(Self { exec })
    }

    fn encode<T: SortElement>(data: &[T]) -> Result<Vec<u32>, SortError> {
        data.iter()
            .map(|v| {
                v.to_key32().ok_or(SortError::UnsupportedOperation {
                    provider: "gpu",
                    operation: "key encoding",
                    dtype: T::DTYPE,
                })
            })
            .collect()
    }
}

impl SortProvider for GpuProvider {
    fn name(&self) -> &'static str {
        "gpu"
    }

    fn supports(&self, op: Operation, dtype: DType, shape: Option<&Shape>) -> bool {
        let encodable = matches!(dtype, DType::F32 | DType::I32 | DType::U32);
        let dense = shape
            .map(|s| s.num_segments() == 1 && s.segment_len() <= MAX_DEVICE_LEN)
            .unwrap_or(false);
        match op {
            Operation::Sort | Operation::ArgSort => encodable && dense,
            Operation::LexSort => false,
        }
    }

    fn sort<T: SortElement>(&mut self, data: &mut [T], _shape: &Shape) -> Result<(), SortError> {
        let keys = Self::encode(data)?;
        let sorted = self.exec.sorted_keys(&keys)?;
        for (slot, bits) in data.iter_mut().zip(sorted) {
            *slot = T::from_key32(bits).ok_or(SortError::UnsupportedOperation {
                provider: "gpu",
                operation: "key decoding",
                dtype: T::DTYPE,
            })?;
        }
        Ok(())
    }

    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        _shape: &Shape,
    ) -> Result<(), SortError> {
        let keys = Self::encode(data)?;
        let perm = self.exec.sorted_permutation(&keys)?;
        for (slot, idx) in indices.iter_mut().zip(perm) {
            *slot = idx as usize;
        }
        Ok(())
    }

    fn lexsort<T: SortElement>(
        &mut self,
        _indices: &mut [usize],
        _keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        Err(SortError::UnsupportedOperation {
            provider: "gpu",
            operation: "lexsort",
            dtype: T::DTYPE,
        })
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        let _ = self.exec.device.poll(PollType::Wait {
            submission_index: None,
            timeout: None,
        });
        Ok(())
    }
}
